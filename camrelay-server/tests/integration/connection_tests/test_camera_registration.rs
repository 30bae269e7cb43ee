use camrelay_core::{ClientMessage, Role, ServerMessage};
use camrelay_server::RelayHost;

use crate::integration::{actor_host, shared_host};
use crate::utils::{TestPeer, settle, sorted, sorted_sessions};

async fn client_ready_announces_camera<H: RelayHost>(host: H) {
    let mut admin = TestPeer::open(&host).await;
    admin.send(ClientMessage::AdminReady).await;
    assert_eq!(
        admin.recv().await,
        ServerMessage::AvailableCameras { cameras: vec![] }
    );

    let mut camera = TestPeer::open(&host).await;
    camera.send(ClientMessage::ClientReady).await;

    assert_eq!(
        admin.recv().await,
        ServerMessage::CameraAvailable {
            client_id: camera.id()
        }
    );
    assert_eq!(sorted_sessions(&host, Role::Client).await, vec![camera.id()]);

    settle(&host).await;
    assert!(camera.drain().is_empty(), "camera must not see admin events");
}

#[tokio::test]
async fn test_client_ready_announces_camera_shared() {
    client_ready_announces_camera(shared_host()).await;
}

#[tokio::test]
async fn test_client_ready_announces_camera_actor() {
    client_ready_announces_camera(actor_host()).await;
}

async fn admin_ready_lists_existing_cameras<H: RelayHost>(host: H, reverse: bool) {
    let mut first = TestPeer::open(&host).await;
    let mut second = TestPeer::open(&host).await;
    let mut idle = TestPeer::open(&host).await;

    if reverse {
        second.send(ClientMessage::ClientReady).await;
        first.send(ClientMessage::ClientReady).await;
    } else {
        first.send(ClientMessage::ClientReady).await;
        second.send(ClientMessage::ClientReady).await;
    }

    let mut admin = TestPeer::open(&host).await;
    admin.send(ClientMessage::AdminReady).await;

    match admin.recv().await {
        ServerMessage::AvailableCameras { cameras } => {
            assert_eq!(sorted(cameras), sorted(vec![first.id(), second.id()]));
        }
        other => panic!("Expected available-cameras, got {other:?}"),
    }

    settle(&host).await;
    assert!(admin.drain().is_empty());
    assert!(idle.drain().is_empty());
}

#[tokio::test]
async fn test_admin_ready_lists_existing_cameras_shared() {
    admin_ready_lists_existing_cameras(shared_host(), false).await;
    admin_ready_lists_existing_cameras(shared_host(), true).await;
}

#[tokio::test]
async fn test_admin_ready_lists_existing_cameras_actor() {
    admin_ready_lists_existing_cameras(actor_host(), false).await;
    admin_ready_lists_existing_cameras(actor_host(), true).await;
}

async fn repeated_client_ready_reannounces<H: RelayHost>(host: H) {
    let mut admin = TestPeer::open(&host).await;
    admin.send(ClientMessage::AdminReady).await;
    admin.recv().await;

    let mut camera = TestPeer::open(&host).await;
    camera.send(ClientMessage::ClientReady).await;
    camera.send(ClientMessage::ClientReady).await;

    let announced = ServerMessage::CameraAvailable {
        client_id: camera.id(),
    };
    assert_eq!(admin.recv().await, announced);
    assert_eq!(admin.recv().await, announced);
    assert_eq!(sorted_sessions(&host, Role::Client).await, vec![camera.id()]);
}

#[tokio::test]
async fn test_repeated_client_ready_reannounces_shared() {
    repeated_client_ready_reannounces(shared_host()).await;
}

#[tokio::test]
async fn test_repeated_client_ready_reannounces_actor() {
    repeated_client_ready_reannounces(actor_host()).await;
}
