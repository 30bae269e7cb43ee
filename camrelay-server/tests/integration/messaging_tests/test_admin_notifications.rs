use camrelay_core::{ClientMessage, ServerMessage};
use camrelay_server::RelayHost;

use crate::integration::{actor_host, shared_host};
use crate::utils::{TestPeer, sample_photo, settle};

async fn camera_switch_reaches_admins<H: RelayHost>(host: H) {
    let mut admin = TestPeer::open(&host).await;
    admin.send(ClientMessage::AdminReady).await;
    admin.recv().await;

    let mut camera = TestPeer::open(&host).await;
    let mut other_camera = TestPeer::open(&host).await;
    camera.send(ClientMessage::ClientReady).await;
    other_camera.send(ClientMessage::ClientReady).await;
    admin.recv().await;
    admin.recv().await;

    camera
        .send(ClientMessage::CameraSwitched {
            camera_name: "Back Camera".into(),
        })
        .await;

    assert_eq!(
        admin.recv().await,
        ServerMessage::CameraSwitched {
            client_id: camera.id(),
            camera_name: "Back Camera".into(),
        }
    );
    settle(&host).await;
    assert!(camera.drain().is_empty());
    assert!(other_camera.drain().is_empty());
}

#[tokio::test]
async fn test_camera_switch_reaches_admins_shared() {
    camera_switch_reaches_admins(shared_host()).await;
}

#[tokio::test]
async fn test_camera_switch_reaches_admins_actor() {
    camera_switch_reaches_admins(actor_host()).await;
}

async fn new_photo_reaches_admins_only<H: RelayHost>(host: H) {
    let mut admin_a = TestPeer::open(&host).await;
    let mut admin_b = TestPeer::open(&host).await;
    let mut camera = TestPeer::open(&host).await;
    let mut idle = TestPeer::open(&host).await;
    admin_a.send(ClientMessage::AdminReady).await;
    admin_b.send(ClientMessage::AdminReady).await;
    camera.send(ClientMessage::ClientReady).await;
    settle(&host).await;
    admin_a.drain();
    admin_b.drain();

    let delivered = host
        .publish_photo(sample_photo())
        .await
        .expect("Failed to publish photo");
    assert_eq!(delivered, 2);

    assert_eq!(admin_a.recv().await, ServerMessage::NewPhoto(sample_photo()));
    assert_eq!(admin_b.recv().await, ServerMessage::NewPhoto(sample_photo()));

    settle(&host).await;
    assert!(camera.drain().is_empty());
    assert!(idle.drain().is_empty());
}

#[tokio::test]
async fn test_new_photo_reaches_admins_only_shared() {
    new_photo_reaches_admins_only(shared_host()).await;
}

#[tokio::test]
async fn test_new_photo_reaches_admins_only_actor() {
    new_photo_reaches_admins_only(actor_host()).await;
}

async fn broadcast_survives_closed_admin<H: RelayHost>(host: H) {
    let mut healthy = TestPeer::open(&host).await;
    healthy.send(ClientMessage::AdminReady).await;
    healthy.recv().await;

    let mut broken = TestPeer::open(&host).await;
    broken.send(ClientMessage::AdminReady).await;
    broken.recv().await;
    let TestPeer { connection, .. } = broken;

    let mut camera = TestPeer::open(&host).await;
    camera.send(ClientMessage::ClientReady).await;

    assert_eq!(
        healthy.recv().await,
        ServerMessage::CameraAvailable {
            client_id: camera.id()
        }
    );
    drop(connection);
}

#[tokio::test]
async fn test_broadcast_survives_closed_admin_shared() {
    broadcast_survives_closed_admin(shared_host()).await;
}

#[tokio::test]
async fn test_broadcast_survives_closed_admin_actor() {
    broadcast_survives_closed_admin(actor_host()).await;
}
