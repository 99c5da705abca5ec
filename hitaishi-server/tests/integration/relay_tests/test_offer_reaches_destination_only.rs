use hitaishi_core::{ClientSignal, ServerSignal};
use serde_json::json;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_offer_reaches_destination_only() {
    init_tracing();

    let (relay, _router) = create_test_relay();
    let mut a = TestPeer::connect(&relay).await;
    let mut b = TestPeer::connect(&relay).await;
    let mut c = TestPeer::connect(&relay).await;

    let sdp = json!({ "type": "offer", "sdp": "v=0\r\no=- 1 2 IN IP4 127.0.0.1" });
    relay.dispatch(
        &a.id,
        ClientSignal::Offer {
            to: b.id.clone(),
            sdp: sdp.clone(),
        },
    );

    let received = b.recv(1000).await.expect("B should receive the offer");
    assert_eq!(
        received,
        ServerSignal::Offer {
            sdp,
            from: a.id.clone(),
        }
    );

    assert!(a.is_idle(), "sender must not get its own offer back");
    assert!(c.is_idle(), "bystander must not see the offer");
}

#[tokio::test]
async fn test_answer_travels_back_to_offerer() {
    init_tracing();

    let (relay, _router) = create_test_relay();
    let mut a = TestPeer::connect(&relay).await;
    let mut b = TestPeer::connect(&relay).await;

    relay.on_offer(&a.id, &b.id, json!("offer-sdp"));
    let Some(ServerSignal::Offer { from, .. }) = b.recv(1000).await else {
        panic!("B should receive the offer");
    };

    relay.on_answer(&b.id, &from, json!("answer-sdp"));

    assert_eq!(
        a.recv(1000).await,
        Some(ServerSignal::Answer {
            sdp: json!("answer-sdp"),
            from: b.id.clone(),
        })
    );
}
