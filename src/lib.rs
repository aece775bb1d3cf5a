//! # LocTrack Trajectory
//!
//! GPS trajectory analysis for live location sharing.
//!
//! This library provides:
//! - Great-circle (haversine) distance between position samples
//! - Cumulative distance along a trajectory
//! - Structured durations between samples
//! - Stop detection (temporal clusters of spatially-close samples)
//! - Per-day summaries for history views
//!
//! Every analysis function is pure: it reads a slice of samples and returns a
//! freshly computed value. Persistence, rendering and export are left to the
//! caller.
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch summaries with rayon
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use loctrack_trajectory::{analyze_stops, total_distance, PositionSample, StopConfig};
//!
//! let samples = vec![
//!     PositionSample::new(-6.2000, 106.8166, 0),
//!     PositionSample::new(-6.2000, 106.8166, 30_000),
//!     PositionSample::new(-6.2000, 106.8166, 90_000),
//!     PositionSample::new(-6.2100, 106.8166, 120_000),
//! ];
//!
//! let meters = total_distance(&samples);
//! let stops = analyze_stops(&samples, &StopConfig::default());
//! assert!(meters > 1000.0);
//! assert_eq!(stops.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TrajectoryError};

// Geographic utilities (distance, bounds, center calculations)
pub mod geo_utils;
pub use geo_utils::{compute_bounds, distance_between, total_distance, EARTH_RADIUS_METERS};

// Structured durations between samples
pub mod duration;
pub use duration::{format_duration, DurationSpec};

// Stop segment detection
pub mod stops;
pub use stops::{analyze_stops, StopConfig, StopSegment};

// Validated, ordered sample sequences
pub mod trajectory;
pub use trajectory::{Trajectory, TrajectoryBuilder};

// Per-leg distance and timing
pub mod legs;
pub use legs::{legs, Leg};

// Movement threshold for live sampling
pub mod movement;
pub use movement::MovementFilter;

// Per-day summaries
pub mod summary;
pub use summary::{day_key, split_by_day, summarize, summarize_all, TrajectorySummary};
#[cfg(feature = "parallel")]
pub use summary::summarize_all_parallel;

// Algorithm toolbox - flat access to all algorithms
pub mod algorithms;

// ============================================================================
// Core Types
// ============================================================================

/// A single GPS fix.
///
/// Serialized as `{ "lat", "lng", "timestamp", "accuracy"? }` with the
/// timestamp in epoch milliseconds.
///
/// # Example
/// ```
/// use loctrack_trajectory::PositionSample;
/// let fix = PositionSample::new(-6.2, 106.816666, 1_700_000_000_000).with_accuracy(8.0);
/// assert!(fix.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub lat: f64,
    pub lng: f64,
    /// Epoch milliseconds
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    /// Reported horizontal accuracy in meters
    #[serde(
        rename = "accuracy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accuracy_meters: Option<f64>,
}

impl PositionSample {
    /// Create a new sample without accuracy information.
    pub fn new(lat: f64, lng: f64, timestamp_ms: i64) -> Self {
        Self {
            lat,
            lng,
            timestamp_ms,
            accuracy_meters: None,
        }
    }

    /// Attach a horizontal accuracy in meters.
    pub fn with_accuracy(mut self, accuracy_meters: f64) -> Self {
        self.accuracy_meters = Some(accuracy_meters);
        self
    }

    /// Check if the sample has valid coordinates.
    ///
    /// Analysis functions do not call this; it is for producers filtering
    /// raw fixes before they become part of a trajectory.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Bounding box of a set of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from samples.
    pub fn from_samples(samples: &[PositionSample]) -> Option<Self> {
        compute_bounds(samples)
    }

    /// Get the center point of the bounds as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Check whether a sample falls inside the bounds (edges inclusive).
    pub fn contains(&self, sample: &PositionSample) -> bool {
        sample.lat >= self.min_lat
            && sample.lat <= self.max_lat
            && sample.lng >= self.min_lng
            && sample.lng <= self.max_lng
    }
}

// ============================================================================
// Tests
// ============================================================================
