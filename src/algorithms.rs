//! # Algorithm Toolbox
//!
//! Flat access to every trajectory algorithm, for callers that want the
//! functions without navigating the module tree.
//!
//! ## Geographic Utilities
//!
//! - **Haversine Distance**: Great-circle distance between two samples
//! - **Total Distance**: Cumulative distance along a trajectory
//! - **Bounds Computation**: Bounding box for a set of samples
//!
//! ## Analysis
//!
//! - **Durations**: Structured minutes/seconds between samples
//! - **Legs**: Per-step distance, duration and speed
//! - **Stop Detection**: Chained-proximity clustering of stationary periods
//! - **Summaries**: Per-day figures and UTC day bucketing
//!
//! # Example
//!
//! ```rust
//! use loctrack_trajectory::algorithms::{distance_between, PositionSample};
//!
//! let jakarta = PositionSample::new(-6.2088, 106.8456, 0);
//! let bandung = PositionSample::new(-6.9175, 107.6191, 0);
//! let distance = distance_between(&jakarta, &bandung);
//! println!("Jakarta to Bandung: {:.0} km", distance / 1000.0);
//! ```

// =============================================================================
// Core Types (re-exported from lib)
// =============================================================================

pub use crate::{Bounds, PositionSample, Trajectory};

// =============================================================================
// Geographic Utilities
// =============================================================================

pub use crate::geo_utils::{compute_bounds, distance_between, total_distance};

// =============================================================================
// Durations and Legs
// =============================================================================

/// Structured duration between two samples, `None` if `end` precedes `start`.
pub use crate::duration::format_duration;
pub use crate::duration::DurationSpec;

/// Per-step distance, duration and speed.
pub use crate::legs::legs;
pub use crate::legs::Leg;

// =============================================================================
// Stop Detection
// =============================================================================

/// Greedy single-pass stop detection.
///
/// Consecutive samples join a stop while each hop stays within the radius;
/// stops shorter than the minimum duration are dropped.
pub use crate::stops::analyze_stops;
pub use crate::stops::{StopConfig, StopSegment};

// =============================================================================
// Sampling and Summaries
// =============================================================================

pub use crate::movement::MovementFilter;
pub use crate::summary::{day_key, split_by_day, summarize, summarize_all, TrajectorySummary};

/// Parallel batch summaries.
///
/// Uses Rayon across subjects. Automatically uses all available CPU cores.
#[cfg(feature = "parallel")]
pub use crate::summary::summarize_all_parallel;
