use crate::error::RelayError;
use crate::host::{ConnectionKey, HostConnection, RelayActor, RelayCommand, RelayHost};
use crate::transport::ConnectionHandle;
use async_trait::async_trait;
use camrelay_core::{ClientMessage, PhotoEvent, Role, SessionId};
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

/// Host that serialises every registry operation through one actor task.
#[derive(Clone)]
pub struct ActorHost {
    command_tx: mpsc::Sender<RelayCommand>,
}

impl ActorHost {
    /// Spawns the relay actor on the current runtime.
    pub fn spawn(queue: usize) -> Self {
        let (tx, rx) = mpsc::channel(queue.max(1));
        tokio::spawn(RelayActor::new(rx).run());
        info!("Relay actor spawned (queue {})", queue);

        Self { command_tx: tx }
    }
}

/// Queues a command and waits for the actor's reply.
async fn request<T>(
    command_tx: &mpsc::Sender<RelayCommand>,
    build: impl FnOnce(oneshot::Sender<T>) -> RelayCommand,
) -> Result<T, RelayError> {
    let (reply, rx) = oneshot::channel();
    command_tx
        .send(build(reply))
        .await
        .map_err(|_| RelayError::ActorStopped)?;
    rx.await.map_err(|_| RelayError::ActorStopped)
}

#[async_trait]
impl RelayHost for ActorHost {
    type Connection = ActorConnection;

    async fn open(&self, handle: ConnectionHandle) -> Result<ActorConnection, RelayError> {
        let (key, session_id) =
            request(&self.command_tx, |reply| RelayCommand::Open { handle, reply }).await?;

        Ok(ActorConnection {
            key,
            session_id,
            command_tx: self.command_tx.clone(),
            closed: false,
        })
    }

    async fn publish_photo(&self, photo: PhotoEvent) -> Result<usize, RelayError> {
        request(&self.command_tx, |reply| RelayCommand::PublishPhoto {
            photo,
            reply,
        })
        .await
    }

    async fn sessions_with_role(&self, role: Role) -> Result<Vec<SessionId>, RelayError> {
        request(&self.command_tx, |reply| RelayCommand::ListRole { role, reply }).await
    }
}

pub struct ActorConnection {
    key: ConnectionKey,
    session_id: SessionId,
    command_tx: mpsc::Sender<RelayCommand>,
    closed: bool,
}

#[async_trait]
impl HostConnection for ActorConnection {
    fn session_id(&self) -> SessionId {
        self.session_id
    }

    async fn deliver(&mut self, msg: ClientMessage) -> Result<(), RelayError> {
        self.command_tx
            .send(RelayCommand::Inbound { key: self.key, msg })
            .await
            .map_err(|_| RelayError::ActorStopped)
    }

    async fn current_session(&mut self) -> Result<Option<SessionId>, RelayError> {
        let key = self.key;
        request(&self.command_tx, |reply| RelayCommand::CurrentSession {
            key,
            reply,
        })
        .await
    }

    async fn close(&mut self) {
        if std::mem::replace(&mut self.closed, true) {
            return;
        }
        if self
            .command_tx
            .send(RelayCommand::Close { key: self.key })
            .await
            .is_err()
        {
            warn!("Relay actor gone before {} closed", self.key);
        }
    }
}

impl Drop for ActorConnection {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        let cmd = RelayCommand::Close { key: self.key };
        if let Err(mpsc::error::TrySendError::Full(cmd)) = self.command_tx.try_send(cmd) {
            let tx = self.command_tx.clone();
            let key = self.key;
            match tokio::runtime::Handle::try_current() {
                Ok(runtime) => {
                    runtime.spawn(async move {
                        if tx.send(cmd).await.is_err() {
                            warn!("Relay actor gone before {} closed", key);
                        }
                    });
                }
                Err(_) => warn!("No runtime to close {}, session left registered", key),
            }
        }
    }
}
