//! Screen listing over real HTTP.

use simulator_client::{Device, Error, Size};
use simulator_tests::StubServer;

#[tokio::test]
async fn test_list_screens_for_device() {
    let server = StubServer::seeded().await.expect("Failed to start stub");
    let client = server.client().expect("Failed to create client");

    let devices = client.list_devices().await.expect("Failed to list devices");
    let screens = client
        .list_screens(&devices[0])
        .await
        .expect("Failed to list screens");

    assert_eq!(screens.len(), 2);
    assert!(screens.iter().all(|s| s.device_id == "dev-1"));
    assert_eq!(screens[0].id(), "scr-1");
    assert_eq!(screens[0].layout[0]["label"], "Start");
    assert!(screens[1].layout.is_empty());
}

#[tokio::test]
async fn test_list_screens_layout_order_preserved() {
    let server = StubServer::seeded().await.expect("Failed to start stub");
    let client = server.client().expect("Failed to create client");

    let screens = client
        .list_screens_for("dev-2")
        .await
        .expect("Failed to list screens");

    assert_eq!(screens.len(), 1);
    assert_eq!(screens[0].layout[0]["type"], "canvas");
    assert_eq!(screens[0].layout[1]["type"], "toolbar");
}

#[tokio::test]
async fn test_list_screens_unknown_device() {
    let server = StubServer::seeded().await.expect("Failed to start stub");
    let client = server.client().expect("Failed to create client");

    let ghost = Device::new("Ghost", Size::new(1.0, 1.0));
    let err = client.list_screens(&ghost).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(ref msg) if msg.contains(ghost.id())));
}

#[tokio::test]
async fn test_list_screens_empty_id_never_reaches_server() {
    let server = StubServer::seeded().await.expect("Failed to start stub");
    let client = server.client().expect("Failed to create client");

    let err = client.list_screens_for("").await.unwrap_err();

    assert!(matches!(err, Error::InvalidRequest(_)));
    assert_eq!(server.request_count(), 0);
}
