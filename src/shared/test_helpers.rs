#[cfg(test)]
use crate::shared::geo::{Coordinate, EARTH_RADIUS_MILES};

/// Degrees of latitude spanning one mile of meridian arc
#[cfg(test)]
const DEGREES_PER_MILE: f64 = 180.0 / (std::f64::consts::PI * EARTH_RADIUS_MILES);

/// A point `miles` due north of `origin`
#[cfg(test)]
#[allow(dead_code)]
pub fn point_miles_north(origin: Coordinate, miles: f64) -> Coordinate {
    Coordinate::new(origin.latitude + miles * DEGREES_PER_MILE, origin.longitude)
}
