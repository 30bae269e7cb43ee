use camrelay_core::{ClientMessage, ServerMessage};
use camrelay_server::RelayHost;

use crate::integration::{actor_host, shared_host};
use crate::utils::{TestClient, answer_to, offer_to, spawn_server};

async fn websocket_signaling_end_to_end<H: RelayHost>(host: H) {
    let server = spawn_server(host).await;

    let mut admin = TestClient::connect(server.addr).await.expect("Admin connect");
    admin.send(&ClientMessage::AdminReady).await.unwrap();
    assert_eq!(
        admin.recv().await.unwrap(),
        ServerMessage::AvailableCameras { cameras: vec![] }
    );

    let mut camera = TestClient::connect(server.addr).await.expect("Camera connect");
    camera.send(&ClientMessage::ClientReady).await.unwrap();
    let camera_id = match admin.recv().await.unwrap() {
        ServerMessage::CameraAvailable { client_id } => client_id,
        other => panic!("Expected camera-available, got {other:?}"),
    };

    admin.send(&offer_to(camera_id, "v=0 admin")).await.unwrap();
    let admin_id = match camera.recv().await.unwrap() {
        ServerMessage::Offer(relayed) => {
            assert_eq!(relayed.payload["offer"]["sdp"], "v=0 admin");
            relayed.sender
        }
        other => panic!("Expected offer, got {other:?}"),
    };

    camera.send(&answer_to(admin_id, "v=0 camera")).await.unwrap();
    match admin.recv().await.unwrap() {
        ServerMessage::Answer(relayed) => assert_eq!(relayed.sender, camera_id),
        other => panic!("Expected answer, got {other:?}"),
    }

    camera.close().await.unwrap();
    assert_eq!(
        admin.recv().await.unwrap(),
        ServerMessage::CameraDisconnected {
            client_id: camera_id
        }
    );
}

#[tokio::test]
async fn test_websocket_signaling_end_to_end_shared() {
    websocket_signaling_end_to_end(shared_host()).await;
}

#[tokio::test]
async fn test_websocket_signaling_end_to_end_actor() {
    websocket_signaling_end_to_end(actor_host()).await;
}

async fn malformed_frames_keep_connection<H: RelayHost>(host: H) {
    let server = spawn_server(host).await;
    let mut peer = TestClient::connect(server.addr).await.expect("Connect");

    peer.send_raw("definitely not json").await.unwrap();
    peer.send_raw(r#"{"type":"offer","offer":{}}"#).await.unwrap();
    peer.send_raw(r#"{"type":"camera-switched"}"#).await.unwrap();
    peer.send_raw(r#"{"type":"teleport"}"#).await.unwrap();

    peer.send(&ClientMessage::AdminReady).await.unwrap();
    assert_eq!(
        peer.recv().await.unwrap(),
        ServerMessage::AvailableCameras { cameras: vec![] }
    );
}

#[tokio::test]
async fn test_malformed_frames_keep_connection_shared() {
    malformed_frames_keep_connection(shared_host()).await;
}

#[tokio::test]
async fn test_malformed_frames_keep_connection_actor() {
    malformed_frames_keep_connection(actor_host()).await;
}
