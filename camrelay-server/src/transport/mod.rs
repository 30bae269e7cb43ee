mod connection_handle;
mod ws_handler;

pub use connection_handle::*;
pub use ws_handler::*;
