mod local_registry;
mod session;
mod session_registry;
mod session_store;

pub use local_registry::*;
pub use session::*;
pub use session_registry::*;
pub use session_store::*;
