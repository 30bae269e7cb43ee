use crate::host::{ConnectionKey, RelayCommand};
use crate::registry::{LocalRegistry, SessionStore};
use crate::signaling::{SessionLifecycle, broadcast_to_admins};
use camrelay_core::ServerMessage;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Single owner of the registry and of every connection's lifecycle.
/// Commands are applied one at a time, in the order they were queued.
pub struct RelayActor {
    registry: LocalRegistry,
    connections: HashMap<ConnectionKey, SessionLifecycle>,
    command_rx: mpsc::Receiver<RelayCommand>,
    next_key: u64,
}

impl RelayActor {
    pub fn new(command_rx: mpsc::Receiver<RelayCommand>) -> Self {
        Self {
            registry: LocalRegistry::new(),
            connections: HashMap::new(),
            command_rx,
            next_key: 0,
        }
    }

    pub async fn run(mut self) {
        info!("Relay actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        info!(
            "Command channel closed, dropping {} connections",
            self.connections.len()
        );
        let registry = &mut self.registry;
        for (_, mut lifecycle) in self.connections.drain() {
            lifecycle.close(registry);
        }

        info!("Relay actor finished");
    }

    fn handle_command(&mut self, cmd: RelayCommand) {
        match cmd {
            RelayCommand::Open { handle, reply } => {
                let key = ConnectionKey(self.next_key);
                self.next_key += 1;

                let lifecycle = SessionLifecycle::open(&mut self.registry, handle);
                let Some(session_id) = lifecycle.session_id() else {
                    return;
                };
                self.connections.insert(key, lifecycle);

                if reply.send((key, session_id)).is_err() {
                    debug!("Opener of {} went away", key);
                    self.close(key);
                }
            }

            RelayCommand::Inbound { key, msg } => {
                let Some(lifecycle) = self.connections.get_mut(&key) else {
                    warn!("Message for unknown connection {}", key);
                    return;
                };
                lifecycle.handle_message(&mut self.registry, msg);
            }

            RelayCommand::Close { key } => self.close(key),

            RelayCommand::CurrentSession { key, reply } => {
                let current = self
                    .connections
                    .get(&key)
                    .and_then(|lifecycle| lifecycle.session_id());
                let _ = reply.send(current);
            }

            RelayCommand::PublishPhoto { photo, reply } => {
                let delivered =
                    broadcast_to_admins(&self.registry, &ServerMessage::NewPhoto(photo));
                let _ = reply.send(delivered);
            }

            RelayCommand::ListRole { role, reply } => {
                let _ = reply.send(self.registry.list_by_role(role));
            }
        }
    }

    fn close(&mut self, key: ConnectionKey) {
        let Some(mut lifecycle) = self.connections.remove(&key) else {
            return;
        };
        lifecycle.close(&mut self.registry);
    }
}
