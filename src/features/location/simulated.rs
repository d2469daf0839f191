use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::core::error::{AppError, Result};
use crate::features::location::models::UserLocation;
use crate::features::location::provider::{LocationProvider, LocationSubscription};

/// Scripted location provider for tests and previews.
///
/// Replays a fixed sequence of fixes: `current_location` answers with the
/// most recent scripted fix, and `watch_location` delivers the sequence in
/// order at the configured cadence.
pub struct SimulatedLocationProvider {
    fixes: Vec<UserLocation>,
    cadence: Duration,
}

impl SimulatedLocationProvider {
    pub fn new(fixes: Vec<UserLocation>) -> Self {
        Self {
            fixes,
            cadence: Duration::ZERO,
        }
    }

    /// Delay between watched fixes; zero delivers them back to back
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }
}

#[async_trait]
impl LocationProvider for SimulatedLocationProvider {
    async fn current_location(&self) -> Result<UserLocation> {
        self.fixes.last().copied().ok_or_else(|| {
            AppError::LocationUnavailable("No scripted fix available".to_string())
        })
    }

    async fn watch_location(&self) -> Result<LocationSubscription> {
        let (tx, rx) = mpsc::channel(16);
        let fixes = self.fixes.clone();
        let cadence = self.cadence;

        tokio::spawn(async move {
            for fix in fixes {
                if !cadence.is_zero() {
                    tokio::time::sleep(cadence).await;
                }
                // Subscriber dropped, stop delivering
                if tx.send(fix).await.is_err() {
                    break;
                }
            }
        });

        Ok(LocationSubscription::new(rx))
    }
}
