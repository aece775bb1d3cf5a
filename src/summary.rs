//! Per-day trajectory summaries for history views.
//!
//! History is stored per subject per UTC calendar day (`yyyy-MM-dd`). This
//! module buckets samples into those days and condenses a day into the
//! figures a history screen shows: distance, elapsed time, time stopped and
//! time moving.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::duration::DurationSpec;
use crate::geo_utils::{compute_bounds, total_distance};
use crate::stops::{analyze_stops, StopConfig, StopSegment};
use crate::trajectory::Trajectory;
use crate::{Bounds, PositionSample};

/// Condensed figures for one trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub sample_count: usize,
    /// Total distance traveled in meters
    pub total_distance_meters: f64,
    /// Timestamp of the first sample, if any
    pub start_ms: Option<i64>,
    /// Timestamp of the last sample, if any
    pub end_ms: Option<i64>,
    /// First to last sample
    pub elapsed: Option<DurationSpec>,
    /// Detected stops in time order
    pub stops: Vec<StopSegment>,
    /// Sum of stop durations in milliseconds
    pub stopped_ms: i64,
    /// Elapsed time not spent in a stop, in milliseconds
    pub moving_ms: i64,
    pub bounds: Option<Bounds>,
    /// Center of `bounds` as `(lat, lng)`
    pub center: Option<(f64, f64)>,
}

impl TrajectorySummary {
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

/// Summarize a chronologically ordered sequence of samples.
///
/// # Example
/// ```
/// use loctrack_trajectory::{summarize, PositionSample, StopConfig};
///
/// let samples: Vec<PositionSample> = (0..4)
///     .map(|i| PositionSample::new(-6.2, 106.816666, i * 30_000))
///     .collect();
/// let summary = summarize(&samples, &StopConfig::default());
/// assert_eq!(summary.stop_count(), 1);
/// assert_eq!(summary.stopped_ms, 90_000);
/// assert_eq!(summary.moving_ms, 0);
/// ```
pub fn summarize(samples: &[PositionSample], config: &StopConfig) -> TrajectorySummary {
    let start_ms = samples.first().map(|s| s.timestamp_ms);
    let end_ms = samples.last().map(|s| s.timestamp_ms);
    let span_ms = match (start_ms, end_ms) {
        (Some(start), Some(end)) => end.saturating_sub(start),
        _ => 0,
    };

    let stops = analyze_stops(samples, config);
    let stopped_ms = stops
        .iter()
        .fold(0i64, |acc, s| acc.saturating_add(s.duration_ms));
    let bounds = compute_bounds(samples);

    let summary = TrajectorySummary {
        sample_count: samples.len(),
        total_distance_meters: total_distance(samples),
        start_ms,
        end_ms,
        elapsed: samples
            .first()
            .and_then(|_| DurationSpec::from_millis(span_ms)),
        stopped_ms,
        moving_ms: span_ms.saturating_sub(stopped_ms).max(0),
        center: bounds.map(|b| b.center()),
        bounds,
        stops,
    };

    debug!(
        "[Summary] {} samples, {:.0}m, {} stops",
        summary.sample_count,
        summary.total_distance_meters,
        summary.stop_count()
    );

    summary
}

/// UTC calendar day key (`yyyy-MM-dd`) for an epoch-millisecond timestamp.
///
/// `None` when the timestamp is outside the representable date range.
pub fn day_key(timestamp_ms: i64) -> Option<String> {
    utc_day(timestamp_ms).map(|d| d.format("%Y-%m-%d").to_string())
}

fn utc_day(timestamp_ms: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|dt| dt.date_naive())
}

/// Bucket samples by UTC calendar day, preserving their order within each day.
pub fn split_by_day(samples: &[PositionSample]) -> BTreeMap<NaiveDate, Vec<PositionSample>> {
    let mut days: BTreeMap<NaiveDate, Vec<PositionSample>> = BTreeMap::new();
    for sample in samples {
        match utc_day(sample.timestamp_ms) {
            Some(day) => days.entry(day).or_default().push(*sample),
            None => warn!(
                "[Summary] Skipping sample with unrepresentable timestamp {}",
                sample.timestamp_ms
            ),
        }
    }
    days
}

/// Summarize many subjects' trajectories.
pub fn summarize_all(
    trajectories: &[(String, Trajectory)],
    config: &StopConfig,
) -> Vec<(String, TrajectorySummary)> {
    trajectories
        .iter()
        .map(|(subject, t)| (subject.clone(), summarize(t, config)))
        .collect()
}

/// Summarize many subjects' trajectories using rayon.
///
/// Output order matches input order.
#[cfg(feature = "parallel")]
pub fn summarize_all_parallel(
    trajectories: &[(String, Trajectory)],
    config: &StopConfig,
) -> Vec<(String, TrajectorySummary)> {
    trajectories
        .par_iter()
        .map(|(subject, t)| (subject.clone(), summarize(t, config)))
        .collect()
}
