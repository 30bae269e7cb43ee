use camrelay_core::{ClientMessage, Role, ServerMessage};
use camrelay_server::RelayHost;

use crate::integration::{actor_host, shared_host};
use crate::utils::{TestPeer, settle, sorted_sessions};

async fn camera_becoming_admin_is_withdrawn<H: RelayHost>(host: H) {
    let mut admin = TestPeer::open(&host).await;
    admin.send(ClientMessage::AdminReady).await;
    admin.recv().await;

    let mut peer = TestPeer::open(&host).await;
    peer.send(ClientMessage::ClientReady).await;
    admin.recv().await;

    peer.send(ClientMessage::AdminReady).await;

    assert_eq!(
        admin.recv().await,
        ServerMessage::CameraDisconnected {
            client_id: peer.id()
        }
    );
    assert_eq!(
        peer.recv().await,
        ServerMessage::AvailableCameras { cameras: vec![] }
    );
    assert!(sorted_sessions(&host, Role::Client).await.is_empty());
    assert_eq!(sorted_sessions(&host, Role::Admin).await.len(), 2);
}

#[tokio::test]
async fn test_camera_becoming_admin_is_withdrawn_shared() {
    camera_becoming_admin_is_withdrawn(shared_host()).await;
}

#[tokio::test]
async fn test_camera_becoming_admin_is_withdrawn_actor() {
    camera_becoming_admin_is_withdrawn(actor_host()).await;
}

async fn stopped_camera_can_register_again<H: RelayHost>(host: H) {
    let mut admin = TestPeer::open(&host).await;
    admin.send(ClientMessage::AdminReady).await;
    admin.recv().await;

    let mut camera = TestPeer::open(&host).await;
    camera.send(ClientMessage::ClientReady).await;
    admin.recv().await;

    camera.send(ClientMessage::ClientStopped).await;
    assert_eq!(
        admin.recv().await,
        ServerMessage::CameraDisconnected {
            client_id: camera.id()
        }
    );
    assert_eq!(camera.current().await, None);

    camera.send(ClientMessage::ClientReady).await;
    let fresh = match admin.recv().await {
        ServerMessage::CameraAvailable { client_id } => client_id,
        other => panic!("Expected camera-available, got {other:?}"),
    };
    assert_ne!(fresh, camera.id());
    assert_eq!(camera.current().await, Some(fresh));
    assert_eq!(sorted_sessions(&host, Role::Client).await, vec![fresh]);

    camera.close().await;
    assert_eq!(camera.current().await, None);
    assert_eq!(
        admin.recv().await,
        ServerMessage::CameraDisconnected { client_id: fresh }
    );
    settle(&host).await;
    assert!(admin.drain().is_empty());
}

#[tokio::test]
async fn test_stopped_camera_can_register_again_shared() {
    stopped_camera_can_register_again(shared_host()).await;
}

#[tokio::test]
async fn test_stopped_camera_can_register_again_actor() {
    stopped_camera_can_register_again(actor_host()).await;
}
