use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::KeyValueStore;
use crate::core::error::{AppError, Result};

/// File-backed key-value store: one file per key inside a dedicated directory.
///
/// Writes land in a temporary file that is renamed into place, so an
/// interrupted or failed write never leaves a partially written collection
/// behind — the previous blob stays readable until the rename commits.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys become file names, so path separators are rejected
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(AppError::InvalidInput(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Persistence(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Persistence(format!(
                "Failed to create storage directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(|e| {
            AppError::Persistence(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::Persistence(format!(
                "Failed to commit {} into place: {}",
                tmp.display(),
                e
            ))
        })?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
