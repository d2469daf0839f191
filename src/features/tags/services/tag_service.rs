use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::tags::dtos::CreateTagDto;
use crate::features::tags::models::Tag;
use crate::modules::storage::KeyValueStore;
use crate::shared::geo::{self, Coordinate};

/// Sole authority for tag persistence and radius queries.
///
/// The whole collection is one JSON blob under a single storage key, so every
/// write rewrites the full serialized collection. That holds up at
/// local-device scale (tens to low thousands of tags); past that, the upgrade
/// path is per-tag records behind a spatial index, behind this same API.
pub struct TagService {
    store: Arc<dyn KeyValueStore>,
    collection_key: String,
    /// Serializes read-modify-write cycles so two concurrent adds cannot
    /// drop each other's tags.
    write_lock: Mutex<()>,
}

impl TagService {
    pub fn new(store: Arc<dyn KeyValueStore>, collection_key: impl Into<String>) -> Self {
        Self {
            store,
            collection_key: collection_key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Every persisted tag, in creation order.
    ///
    /// Read failures fail open to an empty list so the map still renders;
    /// the failure itself is logged so an empty result stays diagnosable.
    pub async fn get_all_tags(&self) -> Vec<Tag> {
        match self.load_collection().await {
            Ok(tags) => tags,
            Err(e) => {
                tracing::error!("Failed to load tag collection: {}", e);
                Vec::new()
            }
        }
    }

    /// Tags within `radius_miles` of `origin`, preserving creation order.
    ///
    /// Linear scan; no spatial index at this scale.
    pub async fn get_tags_within_radius(
        &self,
        origin: Coordinate,
        radius_miles: f64,
    ) -> Vec<Tag> {
        self.get_all_tags()
            .await
            .into_iter()
            .filter(|tag| geo::is_within_radius(origin, tag.location, radius_miles))
            .collect()
    }

    /// Validate, persist, and return a new tag.
    ///
    /// Either the tag is durably written and returned, or an error is raised
    /// and subsequent reads do not contain it — never a partial commit.
    pub async fn add_tag(&self, dto: CreateTagDto) -> Result<Tag> {
        let dto = dto.trimmed();
        if dto.title.is_empty() {
            return Err(AppError::InvalidInput(
                "Tag title must not be empty".to_string(),
            ));
        }
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let _guard = self.write_lock.lock().await;

        // A failed read must propagate here: falling back to an empty
        // collection would clobber every previously stored tag on the write.
        let mut tags = self.load_collection().await?;

        let tag = Tag {
            id: Tag::generate_id(),
            location: dto.location,
            title: dto.title,
            description: dto.description,
            created_at: Utc::now(),
            created_by: dto.created_by,
        };

        tags.push(tag.clone());
        self.save_collection(&tags).await?;

        tracing::info!("Tag created: id={}, title={:?}", tag.id, tag.title);

        Ok(tag)
    }

    async fn load_collection(&self) -> Result<Vec<Tag>> {
        match self.store.get(&self.collection_key).await? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Persistence(format!("Failed to decode tag collection: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn save_collection(&self, tags: &[Tag]) -> Result<()> {
        let bytes = serde_json::to_vec(tags).map_err(|e| {
            AppError::Persistence(format!("Failed to encode tag collection: {}", e))
        })?;
        self.store.set(&self.collection_key, &bytes).await
    }
}
