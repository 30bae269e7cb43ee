use crate::error::RelayError;
use crate::transport::ConnectionHandle;
use async_trait::async_trait;
use camrelay_core::{ClientMessage, PhotoEvent, Role, SessionId};

/// Runtime that hosts the relay. Implementations differ only in how they
/// schedule access to the registry; the routing rules are the same.
#[async_trait]
pub trait RelayHost: Clone + Send + Sync + 'static {
    type Connection: HostConnection;

    /// Accepts a new peer and registers an unassigned session for it.
    async fn open(&self, handle: ConnectionHandle) -> Result<Self::Connection, RelayError>;

    /// Announces a stored photo to every admin. Returns the number of
    /// admins reached.
    async fn publish_photo(&self, photo: PhotoEvent) -> Result<usize, RelayError>;

    async fn sessions_with_role(&self, role: Role) -> Result<Vec<SessionId>, RelayError>;
}

/// One accepted peer. Inbound messages must be delivered in arrival order.
#[async_trait]
pub trait HostConnection: Send + 'static {
    /// Id assigned when the connection was opened. Stays fixed for the
    /// connection's lifetime, even after it re-registers under a new id.
    fn session_id(&self) -> SessionId;

    /// Session the connection is registered under right now. `None` after
    /// `client-stopped` until the next role declaration, and after close.
    async fn current_session(&mut self) -> Result<Option<SessionId>, RelayError>;

    async fn deliver(&mut self, msg: ClientMessage) -> Result<(), RelayError>;

    /// Transport closed. Calling it more than once has no further effect.
    async fn close(&mut self);
}
