use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::geo::Coordinate;

/// A user-authored point-of-interest annotation, immutable once stored.
///
/// Serialized field names (`createdAt`, `createdBy`, nested
/// `location{latitude,longitude}`) are the on-disk collection format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub location: Coordinate,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl Tag {
    /// Generate an identifier unique across the store's lifetime.
    ///
    /// UUID v7 combines a millisecond timestamp with a random suffix, so ids
    /// are never reused even across process restarts.
    pub(crate) fn generate_id() -> String {
        Uuid::now_v7().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::shared::geo::Coordinate;

    #[test]
    fn generated_ids_are_unique_over_many_calls() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(Tag::generate_id()));
        }
    }

    #[test]
    fn serializes_with_the_collection_field_names() {
        let tag = Tag {
            id: "0190b0aa-7b54-7af0-b19a-2f9d1f2c5e10".to_string(),
            location: Coordinate::new(40.7128, -74.0060),
            title: "Coffee spot".to_string(),
            description: "Great espresso".to_string(),
            created_at: "2024-07-15T12:30:00Z".parse().unwrap(),
            created_by: "alex".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&tag).unwrap();

        assert_eq!(json["id"], "0190b0aa-7b54-7af0-b19a-2f9d1f2c5e10");
        assert_eq!(json["location"]["latitude"], 40.7128);
        assert_eq!(json["location"]["longitude"], -74.0060);
        assert_eq!(json["title"], "Coffee spot");
        assert_eq!(json["createdAt"], "2024-07-15T12:30:00Z");
        assert_eq!(json["createdBy"], "alex");
    }

    #[test]
    fn deserializes_from_the_collection_format() {
        let json = r#"{
            "id": "abc123",
            "location": {"latitude": -6.2088, "longitude": 106.8456},
            "title": "Warung",
            "description": "",
            "createdAt": "2024-07-15T12:30:00Z",
            "createdBy": "sari"
        }"#;

        let tag: Tag = serde_json::from_str(json).unwrap();

        assert_eq!(tag.id, "abc123");
        assert_eq!(tag.location, Coordinate::new(-6.2088, 106.8456));
        assert_eq!(tag.description, "");
        assert_eq!(tag.created_by, "sari");
    }
}
