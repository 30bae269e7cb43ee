use crate::error::RelayError;
use crate::transport::ConnectionHandle;
use camrelay_core::{Role, ServerMessage, SessionId};

/// Server-side record of one live connection.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub role: Role,
    handle: ConnectionHandle,
}

impl Session {
    pub(crate) fn new(id: SessionId, handle: ConnectionHandle) -> Self {
        Self {
            id,
            role: Role::Unassigned,
            handle,
        }
    }

    pub fn send(&self, msg: ServerMessage) -> Result<(), RelayError> {
        self.handle.send(msg)
    }
}
