//! Movement threshold for live sampling.
//!
//! While sharing, a device reports fixes far more often than the subject
//! actually moves. Producers only record a fix once it is far enough from the
//! last recorded one.

use serde::{Deserialize, Serialize};

use crate::geo_utils::distance_between;
use crate::PositionSample;

/// Records a fix only after a minimum displacement from the last recorded fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementFilter {
    /// Minimum distance from the last recorded fix, in meters.
    /// Default: 5.0
    pub min_displacement_meters: f64,
}

impl MovementFilter {
    pub fn new(min_displacement_meters: f64) -> Self {
        Self {
            min_displacement_meters,
        }
    }

    /// 5 m threshold, for walking-scale history.
    pub fn fine() -> Self {
        Self::new(5.0)
    }

    /// 10 m threshold, for background tracking while sharing.
    pub fn standard() -> Self {
        Self::new(10.0)
    }

    /// 50 m threshold, for coarse live position updates.
    pub fn coarse() -> Self {
        Self::new(50.0)
    }

    /// Whether `candidate` should be recorded given the last recorded fix.
    pub fn should_record(&self, last: Option<&PositionSample>, candidate: &PositionSample) -> bool {
        match last {
            None => true,
            Some(last) => distance_between(last, candidate) >= self.min_displacement_meters,
        }
    }

    /// Apply the filter over a sequence. The first sample is always kept and
    /// each later one is compared against the last kept sample.
    pub fn filter(&self, samples: &[PositionSample]) -> Vec<PositionSample> {
        let mut kept: Vec<PositionSample> = Vec::with_capacity(samples.len());
        for sample in samples {
            if self.should_record(kept.last(), sample) {
                kept.push(*sample);
            }
        }
        kept
    }
}

impl Default for MovementFilter {
    fn default() -> Self {
        Self::fine()
    }
}
