use crate::registry::{Session, SessionStore};
use crate::transport::ConnectionHandle;
use camrelay_core::{Role, SessionId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// Registry shared by every connection task of a multi-connection process.
/// Clones refer to the same sessions.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<SessionId, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for SessionRegistry {
    fn register(&mut self, handle: ConnectionHandle) -> SessionId {
        loop {
            let id = SessionId::new();
            if let Entry::Vacant(slot) = self.sessions.entry(id) {
                slot.insert(Session::new(id, handle));
                return id;
            }
        }
    }

    fn set_role(&mut self, id: &SessionId, role: Role) -> Option<Role> {
        self.sessions
            .get_mut(id)
            .map(|mut session| std::mem::replace(&mut session.role, role))
    }

    fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    fn list_by_role(&self, role: Role) -> Vec<SessionId> {
        self.sessions
            .iter()
            .filter(|entry| entry.role == role)
            .map(|entry| *entry.key())
            .collect()
    }

    fn remove(&mut self, id: &SessionId) -> Option<Session> {
        self.sessions.remove(id).map(|(_, session)| session)
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
