use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to decode inbound message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode outbound message: {0}")]
    Encode(#[source] serde_json::Error),
}
