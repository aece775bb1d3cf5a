//! Structured durations between samples.
//!
//! The presentation layer renders durations in its own locale, so this module
//! returns the parts rather than a formatted string.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::PositionSample;

/// A non-negative duration split into whole minutes and remaining seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSpec {
    /// Whole seconds (milliseconds are truncated)
    pub total_seconds: i64,
    /// Whole minutes in `total_seconds`
    pub minutes: i64,
    /// Seconds remaining after `minutes`
    pub seconds: i64,
}

impl DurationSpec {
    /// Build from a millisecond span. `None` for negative spans.
    pub fn from_millis(millis: i64) -> Option<Self> {
        if millis < 0 {
            return None;
        }
        let total_seconds = millis / 1000;
        Some(Self {
            total_seconds,
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
        })
    }
}

impl fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes > 0 {
            write!(f, "{}m {}s", self.minutes, self.seconds)
        } else {
            write!(f, "{}s", self.seconds)
        }
    }
}

/// Duration from `start` to `end`.
///
/// Returns `None` when `end` is older than `start` or when the span does not
/// fit in an `i64`. Either case is logged, but this sits on a display path
/// and must not fail.
///
/// # Example
/// ```
/// use loctrack_trajectory::{format_duration, PositionSample};
///
/// let a = PositionSample::new(0.0, 0.0, 0);
/// let b = PositionSample::new(0.0, 0.0, 125_000);
/// let d = format_duration(&a, &b).unwrap();
/// assert_eq!((d.total_seconds, d.minutes, d.seconds), (125, 2, 5));
/// assert!(format_duration(&b, &a).is_none());
/// ```
pub fn format_duration(start: &PositionSample, end: &PositionSample) -> Option<DurationSpec> {
    let Some(delta) = end.timestamp_ms.checked_sub(start.timestamp_ms) else {
        warn!(
            "[Duration] Span from {}ms to {}ms overflows",
            start.timestamp_ms, end.timestamp_ms
        );
        return None;
    };
    let spec = DurationSpec::from_millis(delta);
    if spec.is_none() {
        warn!(
            "[Duration] End sample at {}ms precedes start at {}ms",
            end.timestamp_ms, start.timestamp_ms
        );
    }
    spec
}
