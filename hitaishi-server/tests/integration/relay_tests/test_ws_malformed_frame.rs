use hitaishi_core::ServerSignal;
use serde_json::json;

use crate::integration::{init_tracing, spawn_ws_app};
use crate::utils::WsClient;

#[tokio::test]
async fn test_ws_malformed_frame_keeps_socket_open() {
    init_tracing();
    let (addr, registry, _dir) = spawn_ws_app().await;

    let mut a = WsClient::connect(addr).await;
    let mut b = WsClient::connect(addr).await;

    a.send_text("{ this is not json").await;
    a.send_json(json!({ "event": "hangup", "data": {} })).await;
    a.send_json(json!({ "event": "offer", "data": { "sdp": "v=0" } })).await;

    a.send_json(json!({ "event": "offer", "data": { "to": b.id, "sdp": "v=0" } }))
        .await;

    assert_eq!(
        b.recv(1000).await,
        Some(ServerSignal::Offer {
            sdp: json!("v=0"),
            from: a.id.clone(),
        })
    );
    assert!(registry.contains(&a.id));
    assert_eq!(a.recv(100).await, None, "malformed frames get no reply");
}
