use crate::shared::constants::PLACEMENT_RADIUS_MILES;
use crate::shared::geo::{self, Coordinate};

/// Gatekeeper for where a new tag may be created
pub struct PlacementService;

impl PlacementService {
    /// True when `candidate` lies within the fixed placement radius of the
    /// user's current position.
    ///
    /// The half-mile placement radius is a policy constant independent of
    /// the display radius used when listing nearby tags; the two must not
    /// be conflated.
    pub fn can_place_tag_at(user_location: Coordinate, candidate: Coordinate) -> bool {
        geo::is_within_radius(user_location, candidate, PLACEMENT_RADIUS_MILES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::point_miles_north;

    #[test]
    fn allows_placement_at_the_user_position() {
        let user = Coordinate::new(40.7128, -74.0060);

        assert!(PlacementService::can_place_tag_at(user, user));
    }

    #[test]
    fn allows_placement_at_the_radius_boundary() {
        let user = Coordinate::new(40.7128, -74.0060);
        // Nudged fractionally inside so rounding cannot push it past 0.5
        let candidate = point_miles_north(user, 0.5 * (1.0 - 1e-9));

        assert!(PlacementService::can_place_tag_at(user, candidate));
    }

    #[test]
    fn rejects_placement_just_past_the_radius() {
        let user = Coordinate::new(40.7128, -74.0060);
        let candidate = point_miles_north(user, 0.51);

        assert!(!PlacementService::can_place_tag_at(user, candidate));
    }

    #[test]
    fn rejects_placement_far_away() {
        let user = Coordinate::new(40.7128, -74.0060);
        let candidate = point_miles_north(user, 60.0);

        assert!(!PlacementService::can_place_tag_at(user, candidate));
    }
}
