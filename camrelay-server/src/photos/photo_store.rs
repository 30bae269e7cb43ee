use crate::error::PhotoError;
use async_trait::async_trait;
use bytes::Bytes;
use camrelay_core::PhotoEvent;

/// Where uploaded photos end up. The relay only sees the resulting
/// [`PhotoEvent`].
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn store(&self, data: Bytes) -> Result<PhotoEvent, PhotoError>;

    /// Stored photos, newest first.
    async fn list(&self) -> Result<Vec<PhotoEvent>, PhotoError>;
}
