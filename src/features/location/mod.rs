//! Location feature.
//!
//! Contract for the platform position source the core consumes: single
//! fixes, a watch subscription, and a scripted in-memory provider that
//! stands in for the platform adapter in tests and previews.

pub mod models;
pub mod provider;
pub mod simulated;

pub use models::UserLocation;
pub use provider::{LocationProvider, LocationSubscription};
pub use simulated::SimulatedLocationProvider;
