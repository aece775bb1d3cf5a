//! Validated, chronologically ordered sample sequences.
//!
//! A [`Trajectory`] is built once per query and never mutated. Analysis
//! functions take `&[PositionSample]`, and a trajectory dereferences to one.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrajectoryError};
use crate::PositionSample;

/// Samples for one subject over one time window, strictly ascending by time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    samples: Vec<PositionSample>,
}

impl Trajectory {
    /// Wrap samples after checking that timestamps strictly increase.
    ///
    /// The samples are never reordered: their order is the path that was
    /// traveled, and only the producer knows it.
    pub fn new(samples: Vec<PositionSample>) -> Result<Self> {
        check_order(&samples)?;
        Ok(Self { samples })
    }

    /// A trajectory with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of samples (`[{lat, lng, timestamp, accuracy?}, ...]`).
    ///
    /// # Example
    /// ```
    /// use loctrack_trajectory::Trajectory;
    ///
    /// let json = r#"[
    ///     {"lat": -6.2, "lng": 106.816666, "timestamp": 1000},
    ///     {"lat": -6.2001, "lng": 106.816666, "timestamp": 2000, "accuracy": 5.0}
    /// ]"#;
    /// let trajectory = Trajectory::from_json(json).unwrap();
    /// assert_eq!(trajectory.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let samples: Vec<PositionSample> = serde_json::from_str(json)?;
        Self::new(samples)
    }

    pub fn samples(&self) -> &[PositionSample] {
        &self.samples
    }

    pub fn into_inner(self) -> Vec<PositionSample> {
        self.samples
    }

    /// Span from first to last sample in milliseconds. 0 when fewer than two samples.
    pub fn span_ms(&self) -> i64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
            _ => 0,
        }
    }
}

impl Deref for Trajectory {
    type Target = [PositionSample];

    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

impl AsRef<[PositionSample]> for Trajectory {
    fn as_ref(&self) -> &[PositionSample] {
        &self.samples
    }
}

impl TryFrom<Vec<PositionSample>> for Trajectory {
    type Error = TrajectoryError;

    fn try_from(samples: Vec<PositionSample>) -> Result<Self> {
        Self::new(samples)
    }
}

impl<'de> Deserialize<'de> for Trajectory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let samples = Vec::<PositionSample>::deserialize(deserializer)?;
        Self::new(samples).map_err(serde::de::Error::custom)
    }
}

fn check_order(samples: &[PositionSample]) -> Result<()> {
    for (i, pair) in samples.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.timestamp_ms == prev.timestamp_ms {
            return Err(TrajectoryError::DuplicateTimestamp {
                index: i + 1,
                timestamp_ms: curr.timestamp_ms,
            });
        }
        if curr.timestamp_ms < prev.timestamp_ms {
            return Err(TrajectoryError::OutOfOrder {
                index: i + 1,
                previous_ms: prev.timestamp_ms,
                timestamp_ms: curr.timestamp_ms,
            });
        }
    }
    Ok(())
}

/// Incrementally assembles a [`Trajectory`] from a live fix stream.
///
/// A fix repeating the last recorded timestamp is skipped, matching how the
/// history store deduplicates appends. An older fix is rejected.
#[derive(Debug, Default)]
pub struct TrajectoryBuilder {
    samples: Vec<PositionSample>,
}

impl TrajectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a fix. Returns `Ok(false)` when it was a duplicate and skipped.
    pub fn push(&mut self, sample: PositionSample) -> Result<bool> {
        if let Some(last) = self.samples.last() {
            if sample.timestamp_ms == last.timestamp_ms {
                return Ok(false);
            }
            if sample.timestamp_ms < last.timestamp_ms {
                return Err(TrajectoryError::OutOfOrder {
                    index: self.samples.len(),
                    previous_ms: last.timestamp_ms,
                    timestamp_ms: sample.timestamp_ms,
                });
            }
        }
        self.samples.push(sample);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn build(self) -> Trajectory {
        Trajectory {
            samples: self.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze_stops, total_distance, StopConfig};

    fn at(ms: i64) -> PositionSample {
        PositionSample::new(-6.2, 106.816666, ms)
    }

    #[test]
    fn test_accepts_ascending() {
        let t = Trajectory::new(vec![at(0), at(1_000), at(2_000)]).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.span_ms(), 2_000);
        assert_eq!(t.first().unwrap().timestamp_ms, 0);
    }

    #[test]
    fn test_rejects_out_of_order() {
        let err = Trajectory::new(vec![at(0), at(2_000), at(1_000)]).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryError::OutOfOrder {
                index: 2,
                previous_ms: 2_000,
                timestamp_ms: 1_000
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate() {
        let err = Trajectory::new(vec![at(0), at(0)]).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryError::DuplicateTimestamp { index: 1, .. }
        ));
    }

    #[test]
    fn test_degenerate_trajectories() {
        let empty = Trajectory::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.span_ms(), 0);
        assert_eq!(total_distance(&empty), 0.0);

        let single = Trajectory::new(vec![at(5)]).unwrap();
        assert_eq!(single.span_ms(), 0);
        assert!(analyze_stops(&single, &StopConfig::default()).is_empty());
    }

    #[test]
    fn test_from_json_validates() {
        let bad_order = r#"[{"lat":0,"lng":0,"timestamp":10},{"lat":0,"lng":0,"timestamp":5}]"#;
        assert!(matches!(
            Trajectory::from_json(bad_order),
            Err(TrajectoryError::OutOfOrder { .. })
        ));
        assert!(matches!(
            Trajectory::from_json(r#"[{"lat":0}]"#),
            Err(TrajectoryError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let t = Trajectory::new(vec![at(0), at(1)]).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.starts_with('['));
        let back: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        let unordered = r#"[{"lat":0,"lng":0,"timestamp":1},{"lat":0,"lng":0,"timestamp":0}]"#;
        assert!(serde_json::from_str::<Trajectory>(unordered).is_err());
    }

    #[test]
    fn test_span_saturates() {
        let t = Trajectory::new(vec![at(i64::MIN), at(i64::MAX)]).unwrap();
        assert_eq!(t.span_ms(), i64::MAX);
    }

    #[test]
    fn test_conversions() {
        let samples = vec![at(0), at(1_000)];
        let t = Trajectory::try_from(samples.clone()).unwrap();
        assert_eq!(t.samples(), samples.as_slice());
        assert_eq!(AsRef::<[PositionSample]>::as_ref(&t), samples.as_slice());
        assert_eq!(t.into_inner(), samples);

        assert!(Trajectory::try_from(vec![at(1_000), at(0)]).is_err());
    }

    #[test]
    fn test_builder_with_capacity() {
        let mut builder = TrajectoryBuilder::with_capacity(4);
        assert!(builder.is_empty());
        builder.push(at(0)).unwrap();
        assert!(!builder.is_empty());
        assert_eq!(builder.build().samples(), &[at(0)]);
    }

    #[test]
    fn test_builder_skips_duplicates() {
        let mut builder = TrajectoryBuilder::new();
        assert!(builder.push(at(0)).unwrap());
        assert!(builder.push(at(1_000)).unwrap());
        assert!(!builder.push(at(1_000)).unwrap());
        assert!(builder.push(at(2_000)).unwrap());
        assert_eq!(builder.len(), 3);

        let err = builder.push(at(500)).unwrap_err();
        assert!(matches!(err, TrajectoryError::OutOfOrder { index: 3, .. }));

        let t = builder.build();
        assert_eq!(t.len(), 3);
    }
}
