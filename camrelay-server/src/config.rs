use clap::{Args, ValueEnum};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Which runtime hosts the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuntimeKind {
    /// One concurrent registry shared by all connection tasks.
    Shared,
    /// A single actor task owns the registry.
    Actor,
}

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CAMRELAY_BIND", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory for uploaded photos, created if missing
    #[arg(long, env = "CAMRELAY_UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: PathBuf,

    #[arg(long, env = "CAMRELAY_RUNTIME", value_enum, default_value_t = RuntimeKind::Shared)]
    pub runtime: RuntimeKind,

    /// Upper bound for one WebSocket write; slower peers are disconnected
    #[arg(long, env = "CAMRELAY_SEND_TIMEOUT_MS", default_value_t = 5000)]
    pub send_timeout_ms: u64,

    /// Command queue depth of the actor runtime
    #[arg(long, env = "CAMRELAY_ACTOR_QUEUE", default_value_t = 256)]
    pub actor_queue: usize,

    #[arg(long, env = "CAMRELAY_MAX_UPLOAD_BYTES", default_value_t = 20 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }
}
