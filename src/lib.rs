//! Geofenced tag store core.
//!
//! Users drop short text tags at nearby map points and later query which tags
//! lie within a radius of any given position. This crate owns the tag data
//! model, the great-circle distance predicate, the placement rule, and the
//! persistence contract. Map rendering, permission prompts, and platform
//! location plumbing live in the embedding application and talk to this core
//! through plain in-process calls.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::features::location::models::UserLocation;
pub use crate::features::location::provider::{LocationProvider, LocationSubscription};
pub use crate::features::location::simulated::SimulatedLocationProvider;
pub use crate::features::tags::dtos::CreateTagDto;
pub use crate::features::tags::models::Tag;
pub use crate::features::tags::services::{PlacementService, TagService};
pub use crate::modules::storage::{FileStore, KeyValueStore, MemoryStore};
pub use crate::shared::geo::{distance_miles, is_within_radius, Coordinate};
