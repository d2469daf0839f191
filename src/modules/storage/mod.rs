//! Storage module for the durable tag collection
//!
//! Provides the key-value byte store contract the tag store writes through,
//! a file-backed implementation, and an in-memory one substitutable in tests.

mod file;
mod memory;

use async_trait::async_trait;

use crate::core::error::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Durable key-value byte store
///
/// One key addresses one opaque blob. The whole tag collection lives under a
/// single fixed key, so every write replaces the full serialized collection —
/// a simplicity-over-scale tradeoff that holds at local-device tag counts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the blob stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Durably replace the blob stored under `key`.
    ///
    /// After a failed `set` the previously stored blob must still be intact.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
