use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

/// A position fix from the platform location source.
///
/// Transient: the core reads only the coordinate; accuracy and timestamp are
/// for the UI. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Horizontal accuracy of the fix in meters, non-negative
    pub accuracy: f64,
    /// When the fix was taken
    pub timestamp: DateTime<Utc>,
}

impl UserLocation {
    pub fn new(coordinate: Coordinate, accuracy: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            accuracy,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_fields_flatten_into_the_fix() {
        let fix = UserLocation::new(
            Coordinate::new(40.7128, -74.0060),
            5.0,
            "2024-07-15T12:30:00Z".parse().unwrap(),
        );

        let json: serde_json::Value = serde_json::to_value(fix).unwrap();

        assert_eq!(json["latitude"], 40.7128);
        assert_eq!(json["longitude"], -74.0060);
        assert_eq!(json["accuracy"], 5.0);
    }
}
