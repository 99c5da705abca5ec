use hitaishi_core::ServerSignal;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_welcome_sent_once() {
    init_tracing();

    let (relay, router) = create_test_relay();
    let mut peer = TestPeer::connect_raw(&relay);

    assert_eq!(
        peer.recv(1000).await,
        Some(ServerSignal::Welcome {
            id: peer.id.clone()
        })
    );
    assert!(peer.is_idle());

    let welcomes = router
        .sends()
        .into_iter()
        .filter(|s| matches!(s.signal, ServerSignal::Welcome { .. }))
        .count();
    assert_eq!(welcomes, 1);
}

#[tokio::test]
async fn test_identifiers_are_unique() {
    init_tracing();

    let (relay, router) = create_test_relay();
    let mut ids = std::collections::HashSet::new();

    for _ in 0..50 {
        let peer = TestPeer::connect(&relay).await;
        assert!(ids.insert(peer.id.clone()), "duplicate id {}", peer.id);
    }
    assert_eq!(router.registry().len(), 50);
}
