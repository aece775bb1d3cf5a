//! Geographic utilities: haversine distance, path length and bounds.

use geo::{BoundingRect, Coord, MultiPoint, Point};

use crate::{Bounds, PositionSample};

/// Earth radius used for all great-circle distances, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two samples in meters (haversine formula).
///
/// Symmetric and non-negative. Coordinates are not validated: out-of-range
/// values still produce a finite number and NaN propagates.
///
/// # Example
/// ```
/// use loctrack_trajectory::{distance_between, PositionSample};
///
/// let a = PositionSample::new(-6.2, 106.816666, 0);
/// let b = PositionSample::new(-6.2001, 106.816666, 1_000);
/// let d = distance_between(&a, &b);
/// assert!((d - 11.1).abs() < 0.5);
/// ```
pub fn distance_between(a: &PositionSample, b: &PositionSample) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Total distance along the samples in the order given, in meters.
///
/// Returns 0 for fewer than two samples. The input is never reordered; the
/// caller's order is the path that was traveled.
pub fn total_distance(samples: &[PositionSample]) -> f64 {
    samples
        .windows(2)
        .map(|w| distance_between(&w[0], &w[1]))
        .sum()
}

/// Compute the bounding box of the samples. `None` when empty.
pub fn compute_bounds(samples: &[PositionSample]) -> Option<Bounds> {
    let rect = to_multipoint(samples).bounding_rect()?;
    Some(Bounds {
        min_lat: rect.min().y,
        max_lat: rect.max().y,
        min_lng: rect.min().x,
        max_lng: rect.max().x,
    })
}

/// Convert samples to a geo multipoint (x = lng, y = lat).
pub(crate) fn to_multipoint(samples: &[PositionSample]) -> MultiPoint<f64> {
    samples
        .iter()
        .map(|s| Point::from(Coord { x: s.lng, y: s.lat }))
        .collect::<Vec<_>>()
        .into()
}
