use crate::registry::Session;
use crate::transport::ConnectionHandle;
use camrelay_core::{Role, SessionId};

/// Operations every session registry provides.
///
/// Each call is atomic on its own. Callers never get access to the
/// underlying map, and absence of a session is never an error: the
/// session may simply have disconnected in the meantime.
pub trait SessionStore: Send {
    /// Inserts a new `Unassigned` session and returns its fresh id.
    fn register(&mut self, handle: ConnectionHandle) -> SessionId;

    /// Overwrites the role, returning the previous one, or `None` if the
    /// session is gone.
    fn set_role(&mut self, id: &SessionId, role: Role) -> Option<Role>;

    fn get(&self, id: &SessionId) -> Option<Session>;

    /// Snapshot of the ids currently holding `role`, in no particular order.
    fn list_by_role(&self, role: Role) -> Vec<SessionId>;

    /// Removes the session. Only one caller ever receives `Some` for a
    /// given id.
    fn remove(&mut self, id: &SessionId) -> Option<Session>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
