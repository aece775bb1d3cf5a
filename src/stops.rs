//! Stop segment detection.
//!
//! A stop is a run of consecutive samples that stay close together for long
//! enough to count as the subject being stationary.
//!
//! ## Algorithm
//! A single greedy forward scan:
//! 1. Open a cluster at the first unconsumed sample
//! 2. Extend it while the next sample is within `stop_radius_meters` of the
//!    last sample added (chained proximity, not distance from the centroid)
//! 3. Close it at the first sample that breaks the radius test
//! 4. Emit the cluster if its time span reaches `min_stop_duration_ms`
//! 5. Resume at the sample that closed the cluster
//!
//! Chaining means a slow, steady drift whose hops all stay under the radius
//! is reported as one stop.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geo_utils::distance_between;
use crate::PositionSample;

/// Configuration for stop detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopConfig {
    /// Maximum hop between consecutive samples of one stop, in meters.
    /// Default: 10.0
    pub stop_radius_meters: f64,

    /// Minimum span from first to last sample of a stop, in milliseconds.
    /// Default: 60_000 (one minute)
    pub min_stop_duration_ms: i64,
}

impl StopConfig {
    pub fn new(stop_radius_meters: f64, min_stop_duration_ms: i64) -> Self {
        Self {
            stop_radius_meters,
            min_stop_duration_ms,
        }
    }
}

impl Default for StopConfig {
    fn default() -> Self {
        Self {
            stop_radius_meters: 10.0,
            min_stop_duration_ms: 60_000,
        }
    }
}

/// A detected stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopSegment {
    /// Timestamp of the first sample in the stop
    pub start_ms: i64,
    /// Timestamp of the last sample in the stop
    pub end_ms: i64,
    /// `end_ms - start_ms`
    pub duration_ms: i64,
    /// Mean latitude of the member samples
    pub centroid_lat: f64,
    /// Mean longitude of the member samples
    pub centroid_lng: f64,
    /// Number of member samples
    pub sample_count: usize,
}

impl StopSegment {
    /// Check whether a timestamp falls within the stop (inclusive).
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms <= self.end_ms
    }

    fn from_cluster(cluster: &[PositionSample]) -> Self {
        let first = &cluster[0];
        let last = &cluster[cluster.len() - 1];
        let n = cluster.len() as f64;
        let (sum_lat, sum_lng) = cluster
            .iter()
            .fold((0.0, 0.0), |(lat, lng), s| (lat + s.lat, lng + s.lng));

        Self {
            start_ms: first.timestamp_ms,
            end_ms: last.timestamp_ms,
            duration_ms: last.timestamp_ms.saturating_sub(first.timestamp_ms),
            centroid_lat: sum_lat / n,
            centroid_lng: sum_lng / n,
            sample_count: cluster.len(),
        }
    }
}

/// Detect stops in a chronologically ordered sequence of samples.
///
/// Segments are returned in ascending time order and never overlap. Fewer
/// than two samples yield no stops.
///
/// # Example
/// ```
/// use loctrack_trajectory::{analyze_stops, PositionSample, StopConfig};
///
/// let samples: Vec<PositionSample> = (0..4)
///     .map(|i| PositionSample::new(-6.2, 106.816666, i * 30_000))
///     .collect();
/// let stops = analyze_stops(&samples, &StopConfig::default());
/// assert_eq!(stops.len(), 1);
/// assert_eq!(stops[0].duration_ms, 90_000);
/// ```
pub fn analyze_stops(samples: &[PositionSample], config: &StopConfig) -> Vec<StopSegment> {
    if samples.len() < 2 {
        return vec![];
    }

    let mut segments = Vec::new();
    let mut start = 0;

    while start < samples.len() {
        let mut end = start + 1;
        while end < samples.len()
            && distance_between(&samples[end - 1], &samples[end]) <= config.stop_radius_meters
        {
            end += 1;
        }

        let cluster = &samples[start..end];
        let span = cluster[cluster.len() - 1]
            .timestamp_ms
            .saturating_sub(cluster[0].timestamp_ms);
        if span >= config.min_stop_duration_ms {
            segments.push(StopSegment::from_cluster(cluster));
        }

        start = end;
    }

    debug!(
        "[Stops] {} samples -> {} stops (radius={}m, min={}ms)",
        samples.len(),
        segments.len(),
        config.stop_radius_meters,
        config.min_stop_duration_ms
    );

    segments
}
