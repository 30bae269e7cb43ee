//! Routing semantics shared by every host. Nothing in here knows whether
//! the registry behind it is shared between tasks or owned by an actor.

pub mod broadcaster;
mod lifecycle;
pub mod router;

pub use broadcaster::broadcast_to_admins;
pub use lifecycle::*;
pub use router::{RouteOutcome, route};
