use crate::registry::{Session, SessionStore};
use crate::transport::ConnectionHandle;
use camrelay_core::{Role, SessionId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Registry owned by a single task. Atomicity comes from exclusive
/// ownership rather than locking.
#[derive(Default)]
pub struct LocalRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for LocalRegistry {
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
            .map(|session| std::mem::replace(&mut session.role, role))
    }

    fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.get(id).cloned()
    }

    fn list_by_role(&self, role: Role) -> Vec<SessionId> {
        self.sessions
            .values()
            .filter(|session| session.role == role)
            .map(|session| session.id)
            .collect()
    }

    fn remove(&mut self, id: &SessionId) -> Option<Session> {
        self.sessions.remove(id)
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
