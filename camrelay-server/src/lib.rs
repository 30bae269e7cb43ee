pub mod config;
mod error;
pub mod host;
pub mod http;
pub mod photos;
pub mod registry;
pub mod signaling;
pub mod transport;

pub use config::{RuntimeKind, ServerConfig};
pub use error::{PhotoError, RelayError};
pub use host::*;
pub use http::{AppState, router, serve};
pub use photos::{DiskPhotoStore, PhotoStore};
pub use registry::{LocalRegistry, Session, SessionRegistry, SessionStore};
pub use signaling::{RouteOutcome, SessionLifecycle, broadcast_to_admins, route};
pub use transport::{ConnectionHandle, handle_socket, ws_handler};
