use crate::transport::ConnectionHandle;
use camrelay_core::{ClientMessage, PhotoEvent, Role, SessionId};
use std::fmt;
use tokio::sync::oneshot;

/// Actor-local key of an accepted connection. Stays the same when the
/// connection re-registers under a new session id.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ConnectionKey(pub u64);

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Commands that connection tasks send to the relay actor.
#[derive(Debug)]
pub enum RelayCommand {
    /// A peer connected; reply with its key and initial session id.
    Open {
        handle: ConnectionHandle,
        reply: oneshot::Sender<(ConnectionKey, SessionId)>,
    },

    /// A decoded message arrived on the connection.
    Inbound {
        key: ConnectionKey,
        msg: ClientMessage,
    },

    /// The transport closed.
    Close { key: ConnectionKey },

    /// Session id the connection is currently registered under.
    CurrentSession {
        key: ConnectionKey,
        reply: oneshot::Sender<Option<SessionId>>,
    },

    /// The upload service stored a photo.
    PublishPhoto {
        photo: PhotoEvent,
        reply: oneshot::Sender<usize>,
    },

    ListRole {
        role: Role,
        reply: oneshot::Sender<Vec<SessionId>>,
    },
}
