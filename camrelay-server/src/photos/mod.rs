mod disk_store;
mod handlers;
mod photo_store;

pub use disk_store::*;
pub use handlers::*;
pub use photo_store::*;
