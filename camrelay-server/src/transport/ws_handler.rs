use crate::host::{HostConnection, RelayHost};
use crate::http::AppState;
use crate::transport::ConnectionHandle;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use camrelay_core::ClientMessage;
use futures::{SinkExt, StreamExt};
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub async fn ws_handler<H: RelayHost>(
    ws: WebSocketUpgrade,
    State(state): State<AppState<H>>,
) -> impl IntoResponse {
    let host = state.host.clone();
    let send_timeout = state.send_timeout;

    ws.on_upgrade(move |socket| handle_socket(socket, host, send_timeout))
}

/// Drives one peer: a writer task drains the outbound queue into the
/// socket while this task feeds inbound frames to the host. Whichever side
/// stops first ends the connection, and the host is told exactly once.
pub async fn handle_socket<H: RelayHost>(socket: WebSocket, host: H, send_timeout: Duration) {
    let (mut sender, mut receiver) = socket.split();
    let (handle, mut rx) = ConnectionHandle::channel();

    let mut connection = match host.open(handle).await {
        Ok(connection) => connection,
        Err(e) => {
            error!("Rejecting WebSocket connection: {}", e);
            return;
        }
    };
    // Log identity for the socket. The session itself may be replaced after
    // `client-stopped`.
    let opened_as = connection.session_id();
    info!("New WebSocket connection: {}", opened_as);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let json = match msg.encode() {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize outbound message: {}", e);
                    continue;
                }
            };

            match tokio::time::timeout(send_timeout, sender.send(Message::Text(json.into()))).await
            {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    debug!("WebSocket write to {} failed: {}", opened_as, e);
                    break;
                }
                Err(_) => {
                    warn!(
                        "WebSocket write to {} timed out after {:?}",
                        opened_as, send_timeout
                    );
                    break;
                }
            }
        }
    });

    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => match ClientMessage::decode(text.as_str()) {
                    Ok(msg) => {
                        if let Err(e) = connection.deliver(msg).await {
                            error!("Relay unavailable for {}: {}", opened_as, e);
                            break;
                        }
                    }
                    Err(e) => warn!("Invalid message from {}: {}", opened_as, e),
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!("WebSocket read from {} failed: {}", opened_as, e);
                    break;
                }
            },
            _ = &mut send_task => break,
        }
    }

    send_task.abort();
    match connection.current_session().await {
        Ok(Some(current)) if current != opened_as => {
            info!("WebSocket disconnected: {} (session {})", opened_as, current)
        }
        Ok(Some(_)) => info!("WebSocket disconnected: {}", opened_as),
        Ok(None) => info!("WebSocket disconnected: {} (no session)", opened_as),
        Err(e) => debug!("No current session for {}: {}", opened_as, e),
    }
    connection.close().await;
}
