use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::core::error::Result;
use crate::features::location::models::UserLocation;

/// Source of position fixes for the device.
///
/// Implemented by platform adapters outside this crate; the tag store and
/// placement check consume only the coordinate portion of the fixes.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// A single current fix. Fails with `LocationUnavailable` when the
    /// platform has no fix to give.
    async fn current_location(&self) -> Result<UserLocation>;

    /// Subscribe to fixes delivered at a provider-determined cadence.
    ///
    /// Updates stop once the returned subscription is dropped.
    async fn watch_location(&self) -> Result<LocationSubscription>;
}

/// Live feed of position fixes; dropping it unsubscribes
pub struct LocationSubscription {
    receiver: mpsc::Receiver<UserLocation>,
}

impl LocationSubscription {
    pub fn new(receiver: mpsc::Receiver<UserLocation>) -> Self {
        Self { receiver }
    }

    /// Next fix, or `None` once the provider side has shut down
    pub async fn next_fix(&mut self) -> Option<UserLocation> {
        self.receiver.recv().await
    }

    /// Adapt the subscription into a `Stream` of fixes
    pub fn into_stream(self) -> ReceiverStream<UserLocation> {
        ReceiverStream::new(self.receiver)
    }
}
