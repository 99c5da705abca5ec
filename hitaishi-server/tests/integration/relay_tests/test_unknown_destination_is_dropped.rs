use hitaishi_core::ConnectionId;
use hitaishi_server::RouteError;
use serde_json::json;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_unknown_destination_is_dropped() {
    init_tracing();

    let (relay, router) = create_test_relay();
    let mut a = TestPeer::connect(&relay).await;
    let stranger = ConnectionId::new();

    relay.on_offer(&a.id, &stranger, json!("v=0"));
    relay.on_candidate(&a.id, &stranger, json!({ "candidate": "" }));

    assert!(a.is_idle(), "sender is not told about the miss");

    let failures = router.failures();
    assert_eq!(failures.len(), 2);
    assert!(
        failures
            .iter()
            .all(|f| f.result == Err(RouteError::UnknownDestination(stranger.clone())))
    );
}

#[tokio::test]
async fn test_disconnected_destination_is_dropped() {
    init_tracing();

    let (relay, router) = create_test_relay();
    let mut a = TestPeer::connect(&relay).await;
    let b = TestPeer::connect(&relay).await;
    let b_id = b.id.clone();

    relay.on_disconnect(&b_id);
    drop(b);
    relay.on_answer(&a.id, &b_id, json!("v=0"));

    assert!(a.is_idle());
    assert!(!router.registry().contains(&b_id));
    assert_eq!(
        router.failures().last().map(|f| f.result.clone()),
        Some(Err(RouteError::UnknownDestination(b_id)))
    );
}

#[tokio::test]
async fn test_closed_inbox_is_dropped() {
    init_tracing();

    let (relay, router) = create_test_relay();
    let a = TestPeer::connect(&relay).await;
    let mut b = TestPeer::connect(&relay).await;

    b.close_inbox();
    relay.on_offer(&a.id, &b.id, json!("v=0"));

    assert_eq!(
        router.failures().last().map(|f| f.result.clone()),
        Some(Err(RouteError::Closed(b.id.clone())))
    );
}
