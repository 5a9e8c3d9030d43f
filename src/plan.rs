use thiserror::Error;
use tracing::debug;

use crate::geo::Coordinate;

/// Spacing used when the caller has no preference, in meters.
pub const DEFAULT_SPACING_M: f64 = 1000.0;
pub const DEFAULT_ALTITUDE_M: f64 = 100.0;
/// Upper bound on the length of a generated line.
pub const MAX_WAYPOINTS: usize = 1_000_000;

/// A navigation target. Altitude is relative to home, in meters.
#[derive(Copy, Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("spacing must be a positive number of meters, got {0}")]
    InvalidSpacing(f64),
    #[error("distance from {start:?} to {end:?} is not a finite number")]
    NonFiniteDistance { start: Coordinate, end: Coordinate },
    #[error("distance {distance:.2} m is shorter than spacing {spacing} m")]
    SpacingExceedsDistance { distance: f64, spacing: f64 },
    #[error("spacing would produce {count:.0} waypoints, more than the limit of {max}")]
    TooManyWaypoints { count: f64, max: usize },
}

/// Number of intervals between `start` and `end` at the given spacing.
/// The generated line has one more point than this.
pub fn interval_count(start: &Coordinate, end: &Coordinate, spacing: f64) -> Result<usize, PlanError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(PlanError::InvalidSpacing(spacing));
    }
    let distance = start.distance_to(end);
    if !distance.is_finite() {
        return Err(PlanError::NonFiniteDistance { start: *start, end: *end });
    }
    let intervals = (distance / spacing).floor();
    if intervals < 1.0 {
        return Err(PlanError::SpacingExceedsDistance { distance, spacing });
    }
    // Checked as f64: the cast to usize saturates.
    if intervals + 1.0 > MAX_WAYPOINTS as f64 {
        return Err(PlanError::TooManyWaypoints { count: intervals + 1.0, max: MAX_WAYPOINTS });
    }
    Ok(intervals as usize)
}

/// Linearly interpolates waypoints from `start` to `end`, both included.
/// Latitude and longitude are blended independently, so the points follow a
/// straight line in degree space, not the great circle.
pub fn generate_waypoints(
    start: Coordinate,
    end: Coordinate,
    spacing: f64,
    altitude: f64,
) -> Result<Vec<Waypoint>, PlanError> {
    let intervals = interval_count(&start, &end, spacing)?;
    debug!(intervals, spacing, "interpolating waypoints");

    let dlat = end.lat - start.lat;
    let dlon = end.lon - start.lon;
    let waypoints = (0..=intervals)
        .map(|i| {
            let f = i as f64 / intervals as f64;
            Waypoint::new(start.lat + dlat * f, start.lon + dlon * f, altitude)
        })
        .collect();
    Ok(waypoints)
}
