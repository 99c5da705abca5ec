use hitaishi_core::ServerSignal;
use serde_json::json;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_reconnect_gets_new_id() {
    init_tracing();

    let (relay, router) = create_test_relay();
    let mut a = TestPeer::connect(&relay).await;

    let old = TestPeer::connect(&relay).await;
    let old_id = old.id.clone();
    relay.on_disconnect(&old_id);
    drop(old);

    let mut again = TestPeer::connect(&relay).await;
    assert_ne!(again.id, old_id);

    relay.on_offer(&a.id, &old_id, json!("stale"));
    assert!(again.is_idle(), "old identifier must not route to the new connection");

    relay.on_offer(&a.id, &again.id, json!("fresh"));
    assert_eq!(
        again.recv(1000).await,
        Some(ServerSignal::Offer {
            sdp: json!("fresh"),
            from: a.id.clone(),
        })
    );

    assert!(a.is_idle());
    assert_eq!(router.registry().len(), 2);
}
