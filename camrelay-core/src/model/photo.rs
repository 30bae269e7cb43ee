use serde::{Deserialize, Serialize};

/// Metadata of a stored photo, as announced to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEvent {
    pub filename: String,
    /// ISO-8601 UTC.
    pub timestamp: String,
    /// Bytes.
    pub size: u64,
}
