use std::env;
use std::path::PathBuf;

use crate::shared::constants::{DEFAULT_DISPLAY_RADIUS_MILES, TAGS_STORAGE_KEY};

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the file-backed store keeps its blobs in
    pub dir: PathBuf,
    /// Storage key addressing the serialized tag collection
    pub collection_key: String,
}

#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Radius used when listing tags around the user for display, in miles.
    /// Independent of the fixed placement radius.
    pub display_radius_miles: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            storage: StorageConfig::from_env()?,
            query: QueryConfig::from_env()?,
        })
    }
}

impl StorageConfig {
    const DEFAULT_STORAGE_DIR: &'static str = ".geotag";

    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("GEOTAG_STORAGE_DIR")
            .unwrap_or_else(|_| Self::DEFAULT_STORAGE_DIR.to_string());
        let collection_key =
            env::var("GEOTAG_STORAGE_KEY").unwrap_or_else(|_| TAGS_STORAGE_KEY.to_string());
        if collection_key.is_empty() {
            return Err("GEOTAG_STORAGE_KEY must not be empty".to_string());
        }

        Ok(StorageConfig {
            dir: PathBuf::from(dir),
            collection_key,
        })
    }
}

impl QueryConfig {
    pub fn from_env() -> Result<Self, String> {
        let display_radius_miles = env::var("GEOTAG_DISPLAY_RADIUS_MILES")
            .unwrap_or_else(|_| DEFAULT_DISPLAY_RADIUS_MILES.to_string())
            .parse::<f64>()
            .map_err(|e| format!("Invalid GEOTAG_DISPLAY_RADIUS_MILES: {}", e))?;
        if !display_radius_miles.is_finite() || display_radius_miles < 0.0 {
            return Err("GEOTAG_DISPLAY_RADIUS_MILES must be a non-negative number".to_string());
        }

        Ok(QueryConfig {
            display_radius_miles,
        })
    }
}
