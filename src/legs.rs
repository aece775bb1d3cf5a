//! Per-leg annotations: distance, elapsed time and speed between consecutive samples.
//!
//! History tables show, for each fix, how far and how long it was since the
//! previous one. The first fix has no leg.

use serde::{Deserialize, Serialize};

use crate::geo_utils::distance_between;
use crate::PositionSample;

/// The step from sample `index - 1` to sample `index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Index of the later sample
    pub index: usize,
    /// Great-circle distance in meters
    pub distance_meters: f64,
    /// Time since the previous sample in milliseconds, saturating at the `i64` range
    pub duration_ms: i64,
    /// Average speed in m/s, `None` when no time elapsed
    pub speed_mps: Option<f64>,
}

/// Compute one [`Leg`] per consecutive pair of samples.
pub fn legs(samples: &[PositionSample]) -> Vec<Leg> {
    samples
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let distance_meters = distance_between(&w[0], &w[1]);
            let duration_ms = w[1].timestamp_ms.saturating_sub(w[0].timestamp_ms);
            let speed_mps = if duration_ms > 0 {
                Some(distance_meters / (duration_ms as f64 / 1000.0))
            } else {
                None
            };
            Leg {
                index: i + 1,
                distance_meters,
                duration_ms,
                speed_mps,
            }
        })
        .collect()
}
