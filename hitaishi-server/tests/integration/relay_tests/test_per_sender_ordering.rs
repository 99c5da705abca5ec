use hitaishi_core::ServerSignal;
use serde_json::json;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_per_sender_ordering() {
    init_tracing();

    let (relay, _router) = create_test_relay();
    let a = TestPeer::connect(&relay).await;
    let mut b = TestPeer::connect(&relay).await;

    const COUNT: usize = 200;
    for i in 0..COUNT {
        relay.on_candidate(&a.id, &b.id, json!({ "seq": i }));
    }

    for expected in 0..COUNT {
        match b.recv(1000).await {
            Some(ServerSignal::Candidate(c)) => assert_eq!(c["seq"], expected),
            other => panic!("expected candidate #{}, got {:?}", expected, other),
        }
    }
    assert!(b.is_idle());
}

#[tokio::test]
async fn test_ordering_holds_across_tasks() {
    init_tracing();

    let (relay, _router) = create_test_relay();
    let a = TestPeer::connect(&relay).await;
    let c = TestPeer::connect(&relay).await;
    let mut b = TestPeer::connect(&relay).await;

    let spawn_sender = |from: hitaishi_core::ConnectionId, tag: &'static str| {
        let relay = relay.clone();
        let to = b.id.clone();
        tokio::spawn(async move {
            for i in 0..100 {
                relay.on_candidate(&from, &to, json!({ "tag": tag, "seq": i }));
                tokio::task::yield_now().await;
            }
        })
    };

    let first = spawn_sender(a.id.clone(), "a");
    let second = spawn_sender(c.id.clone(), "c");
    first.await.unwrap();
    second.await.unwrap();

    let mut next = std::collections::HashMap::from([("a", 0), ("c", 0)]);
    for _ in 0..200 {
        let Some(ServerSignal::Candidate(candidate)) = b.recv(1000).await else {
            panic!("missing candidate");
        };
        let tag = if candidate["tag"] == "a" { "a" } else { "c" };
        let expected = next.get_mut(tag).unwrap();
        assert_eq!(candidate["seq"], *expected, "out of order from {}", tag);
        *expected += 1;
    }
}
