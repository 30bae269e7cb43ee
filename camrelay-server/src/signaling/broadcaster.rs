use crate::registry::SessionStore;
use camrelay_core::{Role, ServerMessage};
use tracing::warn;

/// Sends `event` to every session currently holding the admin role and
/// returns how many accepted it.
///
/// Iterates a snapshot of admin ids, so sessions leaving mid-broadcast are
/// skipped. A failed send moves on to the next admin; removing sessions is
/// left to the lifecycle.
pub fn broadcast_to_admins<S>(store: &S, event: &ServerMessage) -> usize
where
    S: SessionStore + ?Sized,
{
    let admins = store.list_by_role(Role::Admin);
    let mut delivered = 0;

    for id in admins {
        let Some(admin) = store.get(&id) else {
            continue;
        };
        match admin.send(event.clone()) {
            Ok(()) => delivered += 1,
            Err(e) => warn!("Broadcast to admin {} failed: {}", id, e),
        }
    }

    delivered
}
