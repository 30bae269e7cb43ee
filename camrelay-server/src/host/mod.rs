mod actor_host;
mod relay_actor;
mod relay_command;
mod relay_host;
mod shared_host;

pub use actor_host::*;
pub use relay_actor::*;
pub use relay_command::*;
pub use relay_host::*;
pub use shared_host::*;
