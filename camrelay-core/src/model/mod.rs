mod message;
mod photo;
mod role;
mod session;

pub use message::{ClientMessage, Payload, Relayed, ServerMessage, Signal, SignalKind};
pub use photo::PhotoEvent;
pub use role::Role;
pub use session::SessionId;
