use crate::error::RelayError;
use camrelay_core::ServerMessage;
use tokio::sync::mpsc;

/// Outbound side of one peer connection. The writer task on the other end
/// of the queue owns the socket; enqueueing never blocks.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    tx: mpsc::UnboundedSender<ServerMessage>,
}

impl ConnectionHandle {
    pub fn new(tx: mpsc::UnboundedSender<ServerMessage>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ServerMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn send(&self, msg: ServerMessage) -> Result<(), RelayError> {
        self.tx.send(msg).map_err(|_| RelayError::PeerGone)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
