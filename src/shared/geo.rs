use serde::{Deserialize, Serialize};
use validator::Validate;

/// Earth's mean radius in miles (for the haversine formula)
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A point on Earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within [-90, 90]"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two coordinates in miles (haversine formula)
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// True when `target` lies within `radius_miles` of `origin`.
/// The boundary is inclusive: a target exactly at the radius counts as within.
pub fn is_within_radius(origin: Coordinate, target: Coordinate, radius_miles: f64) -> bool {
    distance_miles(origin, target) <= radius_miles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::point_miles_north;

    #[test]
    fn distance_to_same_point_is_zero() {
        let point = Coordinate::new(-6.2088, 106.8456);

        assert!(distance_miles(point, point) < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        // Jakarta and Bandung
        let a = Coordinate::new(-6.2088, 106.8456);
        let b = Coordinate::new(-6.9175, 107.6191);

        let forward = distance_miles(a, b);
        let back = distance_miles(b, a);

        assert!((forward - back).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);

        let distance = distance_miles(a, b);

        assert!((distance - 69.17).abs() < 0.1);
    }

    #[test]
    fn known_city_pair_distance() {
        // Jakarta to Bandung, approx 72 miles by Haversine
        let jakarta = Coordinate::new(-6.2088, 106.8456);
        let bandung = Coordinate::new(-6.9175, 107.6191);

        let distance = distance_miles(jakarta, bandung);

        assert!(distance > 68.0 && distance < 78.0);
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let origin = Coordinate::new(40.7128, -74.0060);
        let target = point_miles_north(origin, 0.5);
        let distance = distance_miles(origin, target);

        // A target exactly at the radius distance counts as within
        assert!(is_within_radius(origin, target, distance));
        assert!(!is_within_radius(origin, target, distance - 1e-9));
    }

    #[test]
    fn within_radius_matches_the_distance_predicate() {
        let origin = Coordinate::new(51.5074, -0.1278);
        for miles in [0.0, 0.2, 0.49, 0.6, 5.0, 60.0] {
            let target = point_miles_north(origin, miles);
            let expected = distance_miles(origin, target) <= 0.5;

            assert_eq!(is_within_radius(origin, target, 0.5), expected);
        }
    }
}
