use hitaishi_core::ServerSignal;
use serde_json::json;

use crate::integration::{init_tracing, spawn_ws_app};
use crate::utils::WsClient;

#[tokio::test]
async fn test_ws_offer_answer_candidate() {
    init_tracing();
    let (addr, registry, _dir) = spawn_ws_app().await;

    let mut caller = WsClient::connect(addr).await;
    let mut callee = WsClient::connect(addr).await;
    assert_ne!(caller.id, callee.id);
    assert_eq!(registry.len(), 2);

    let offer = json!({ "type": "offer", "sdp": "v=0\r\no=- 1 1 IN IP4 0.0.0.0" });
    caller
        .send_json(json!({ "event": "offer", "data": { "to": callee.id, "sdp": offer } }))
        .await;
    assert_eq!(
        callee.recv(1000).await,
        Some(ServerSignal::Offer {
            sdp: offer,
            from: caller.id.clone(),
        })
    );

    let answer = json!({ "type": "answer", "sdp": "v=0" });
    callee
        .send_json(json!({ "event": "answer", "data": { "to": caller.id, "sdp": answer } }))
        .await;
    assert_eq!(
        caller.recv(1000).await,
        Some(ServerSignal::Answer {
            sdp: answer,
            from: callee.id.clone(),
        })
    );

    let candidate = json!({
        "candidate": "candidate:1 1 udp 2122260223 192.168.1.20 50000 typ host",
        "sdpMid": "0",
        "sdpMLineIndex": 0
    });
    caller
        .send_json(json!({ "event": "candidate", "data": { "to": callee.id, "candidate": candidate } }))
        .await;
    assert_eq!(
        callee.recv(1000).await,
        Some(ServerSignal::Candidate(candidate))
    );

    // Nothing echoes back to the sender.
    assert_eq!(caller.recv(100).await, None);
}
