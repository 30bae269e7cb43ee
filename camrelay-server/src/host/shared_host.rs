use crate::error::RelayError;
use crate::host::{HostConnection, RelayHost};
use crate::registry::{SessionRegistry, SessionStore};
use crate::signaling::{SessionLifecycle, broadcast_to_admins};
use crate::transport::ConnectionHandle;
use async_trait::async_trait;
use camrelay_core::{ClientMessage, PhotoEvent, Role, ServerMessage, SessionId};

/// Long-lived multi-connection host: every connection task drives its own
/// lifecycle directly against one concurrent registry.
#[derive(Clone, Default)]
pub struct SharedHost {
    registry: SessionRegistry,
}

impl SharedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }
}

#[async_trait]
impl RelayHost for SharedHost {
    type Connection = SharedConnection;

    async fn open(&self, handle: ConnectionHandle) -> Result<SharedConnection, RelayError> {
        let mut registry = self.registry.clone();
        let lifecycle = SessionLifecycle::open(&mut registry, handle);
        let session_id = lifecycle.session_id().ok_or(RelayError::PeerGone)?;

        Ok(SharedConnection {
            registry,
            lifecycle,
            session_id,
        })
    }

    async fn publish_photo(&self, photo: PhotoEvent) -> Result<usize, RelayError> {
        Ok(broadcast_to_admins(
            &self.registry,
            &ServerMessage::NewPhoto(photo),
        ))
    }

    async fn sessions_with_role(&self, role: Role) -> Result<Vec<SessionId>, RelayError> {
        Ok(self.registry.list_by_role(role))
    }
}

pub struct SharedConnection {
    registry: SessionRegistry,
    lifecycle: SessionLifecycle,
    session_id: SessionId,
}

#[async_trait]
impl HostConnection for SharedConnection {
    fn session_id(&self) -> SessionId {
        self.session_id
    }

    async fn deliver(&mut self, msg: ClientMessage) -> Result<(), RelayError> {
        self.lifecycle.handle_message(&mut self.registry, msg);
        Ok(())
    }

    async fn current_session(&mut self) -> Result<Option<SessionId>, RelayError> {
        Ok(self.lifecycle.session_id())
    }

    async fn close(&mut self) {
        self.lifecycle.close(&mut self.registry);
    }
}

impl Drop for SharedConnection {
    fn drop(&mut self) {
        self.lifecycle.close(&mut self.registry);
    }
}
