//! Unified error handling for trajectory construction.
//!
//! Analysis functions are total and never fail. Errors only arise at the
//! boundary where samples are parsed or assembled into a [`Trajectory`].
//!
//! [`Trajectory`]: crate::Trajectory

use thiserror::Error;

/// Error type for trajectory construction and parsing.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    /// A sample is older than the one before it
    #[error("Sample {index} at {timestamp_ms}ms is older than previous sample at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        previous_ms: i64,
        timestamp_ms: i64,
    },
    /// Two samples share the same timestamp
    #[error("Sample {index} repeats timestamp {timestamp_ms}ms")]
    DuplicateTimestamp { index: usize, timestamp_ms: i64 },
    /// Input could not be parsed into position samples
    #[error("Invalid sample JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type alias for trajectory operations.
pub type Result<T> = std::result::Result<T, TrajectoryError>;
