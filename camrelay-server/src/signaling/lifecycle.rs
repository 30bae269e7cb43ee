use crate::registry::SessionStore;
use crate::signaling::{broadcast_to_admins, route};
use crate::transport::ConnectionHandle;
use camrelay_core::{ClientMessage, Role, ServerMessage, SessionId, Signal, SignalKind};
use tracing::{debug, info, warn};

/// Per-connection state machine. Owns the connection's current session id
/// and is the only place that changes roles or removes sessions.
///
/// After `client-stopped` the connection stays open without a session; the
/// next role declaration registers it again under a fresh id.
#[derive(Debug)]
pub struct SessionLifecycle {
    handle: ConnectionHandle,
    session: Option<SessionId>,
}

impl SessionLifecycle {
    pub fn open<S>(store: &mut S, handle: ConnectionHandle) -> Self
    where
        S: SessionStore + ?Sized,
    {
        let id = store.register(handle.clone());
        debug!("Registered session {}", id);
        Self {
            handle,
            session: Some(id),
        }
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session
    }

    pub fn handle_message<S>(&mut self, store: &mut S, msg: ClientMessage)
    where
        S: SessionStore + ?Sized,
    {
        match msg {
            ClientMessage::ClientReady => self.declare(store, Role::Client),
            ClientMessage::AdminReady => self.declare(store, Role::Admin),
            ClientMessage::Offer(signal) => self.relay(store, SignalKind::Offer, signal),
            ClientMessage::Answer(signal) => self.relay(store, SignalKind::Answer, signal),
            ClientMessage::IceCandidate(signal) => {
                self.relay(store, SignalKind::IceCandidate, signal)
            }
            ClientMessage::ClientStopped => self.stop(store),
            ClientMessage::CameraSwitched { camera_name } => {
                self.camera_switched(store, camera_name)
            }
        }
    }

    /// Removes the session on transport close. Safe to call repeatedly.
    pub fn close<S>(&mut self, store: &mut S)
    where
        S: SessionStore + ?Sized,
    {
        if let Some(id) = self.session.take() {
            retire(store, id);
            info!("Session {} closed", id);
        }
    }

    fn declare<S>(&mut self, store: &mut S, role: Role)
    where
        S: SessionStore + ?Sized,
    {
        let id = match self.session {
            Some(id) => id,
            None => {
                let id = store.register(self.handle.clone());
                info!("Connection re-registered as session {}", id);
                self.session = Some(id);
                id
            }
        };

        let Some(current) = store.get(&id).map(|session| session.role) else {
            self.session = None;
            return;
        };
        if current != Role::Unassigned {
            debug!("Session {} re-declared role {} -> {}", id, current, role);
        }

        // Announce the camera going away before the session joins the admins.
        if current == Role::Client && role != Role::Client {
            broadcast_to_admins(store, &ServerMessage::CameraDisconnected { client_id: id });
        }

        if store.set_role(&id, role).is_none() {
            self.session = None;
            return;
        }

        match role {
            Role::Client => {
                info!("Camera client ready: {}", id);
                broadcast_to_admins(store, &ServerMessage::CameraAvailable { client_id: id });
            }
            Role::Admin => {
                info!("Admin ready: {}", id);
                let cameras = store.list_by_role(Role::Client);
                if let Err(e) = self.handle.send(ServerMessage::AvailableCameras { cameras }) {
                    warn!("Failed to send camera list to {}: {}", id, e);
                }
            }
            Role::Unassigned => {}
        }
    }

    fn relay<S>(&self, store: &S, kind: SignalKind, signal: Signal)
    where
        S: SessionStore + ?Sized,
    {
        let Some(sender) = self.session else {
            debug!("Dropping {} from unregistered connection", kind.as_str());
            return;
        };
        route(store, sender, kind, signal);
    }

    fn stop<S>(&mut self, store: &mut S)
    where
        S: SessionStore + ?Sized,
    {
        let Some(id) = self.client_session(store, "client-stopped") else {
            return;
        };
        info!("Client stopped camera: {}", id);
        self.session = None;
        retire(store, id);
    }

    fn camera_switched<S>(&mut self, store: &S, camera_name: String)
    where
        S: SessionStore + ?Sized,
    {
        let Some(id) = self.client_session(store, "camera-switched") else {
            return;
        };
        info!("Client {} switched camera to {}", id, camera_name);
        broadcast_to_admins(
            store,
            &ServerMessage::CameraSwitched {
                client_id: id,
                camera_name,
            },
        );
    }

    /// Current session id if it holds the client role.
    fn client_session<S>(&mut self, store: &S, what: &str) -> Option<SessionId>
    where
        S: SessionStore + ?Sized,
    {
        let id = self.session?;
        match store.get(&id).map(|session| session.role) {
            Some(Role::Client) => Some(id),
            Some(role) => {
                warn!("Ignoring {} from {} session {}", what, role, id);
                None
            }
            None => {
                self.session = None;
                None
            }
        }
    }
}

/// Removes a session and, if it was a camera, tells the admins. The
/// registry hands the removed session to exactly one caller, so the
/// notification goes out at most once.
fn retire<S>(store: &mut S, id: SessionId)
where
    S: SessionStore + ?Sized,
{
    let Some(session) = store.remove(&id) else {
        return;
    };
    if session.role == Role::Client {
        broadcast_to_admins(store, &ServerMessage::CameraDisconnected { client_id: id });
    }
}
