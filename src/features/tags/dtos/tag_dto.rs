use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::geo::Coordinate;

/// Request DTO for creating a tag at a map point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagDto {
    /// Where the tag is dropped; must pass the placement check upstream
    #[validate(nested)]
    pub location: Coordinate,

    /// Short label shown on the map marker
    #[validate(length(min = 1, max = 50, message = "Title must be 1-50 characters"))]
    pub title: String,

    /// Longer text, may be empty
    #[validate(length(max = 200, message = "Description must not exceed 200 characters"))]
    pub description: String,

    /// Free-text author label
    pub created_by: String,
}

impl CreateTagDto {
    /// Copy with title and description stripped of surrounding whitespace.
    /// Trimming happens before validation so the length bounds apply to what
    /// actually gets stored.
    pub fn trimmed(&self) -> Self {
        Self {
            location: self.location,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            created_by: self.created_by.clone(),
        }
    }
}
