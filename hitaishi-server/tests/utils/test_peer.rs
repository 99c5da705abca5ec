use hitaishi_core::{ConnectionId, ServerSignal};
use hitaishi_server::Relay;
use std::time::Duration;
use tokio::sync::mpsc;

/// A connection attached straight to a relay, standing in for a socket.
pub struct TestPeer {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<ServerSignal>,
}

impl TestPeer {
    /// Connect and consume the welcome frame.
    pub async fn connect(relay: &Relay) -> Self {
        let mut peer = Self::connect_raw(relay);
        match peer.recv(1000).await {
            Some(ServerSignal::Welcome { id }) => assert_eq!(id, peer.id),
            other => panic!("expected welcome, got {:?}", other),
        }
        peer
    }

    /// Connect without reading anything.
    pub fn connect_raw(relay: &Relay) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = relay.on_connect(tx);
        Self { id, rx }
    }

    pub async fn recv(&mut self, timeout_ms: u64) -> Option<ServerSignal> {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// True when nothing is queued for this peer.
    pub fn is_idle(&mut self) -> bool {
        self.rx.try_recv().is_err()
    }

    /// Drop the receiving half, like a socket whose writer has gone away.
    pub fn close_inbox(&mut self) {
        self.rx.close();
    }
}
