//! Geofenced tag feature.
//!
//! Owns the durable collection of user-authored map tags: creation with the
//! half-mile placement rule, listing, and radius queries backed by the
//! haversine distance predicate.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::{PlacementService, TagService};
