use crate::signaling::{Outbox, RouteError, SignalRouter};
use dashmap::DashMap;
use hitaishi_core::{ConnectionId, ServerSignal};
use std::sync::Arc;

/// Live connections keyed by identifier.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    peers: Arc<DashMap<ConnectionId, Outbox>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.peers.contains_key(id)
    }
}

impl SignalRouter for ConnectionRegistry {
    fn register(&self, id: ConnectionId, outbox: Outbox) {
        self.peers.insert(id, outbox);
    }

    fn unregister(&self, id: &ConnectionId) {
        self.peers.remove(id);
    }

    fn send(&self, id: &ConnectionId, signal: ServerSignal) -> Result<(), RouteError> {
        let Some(outbox) = self.peers.get(id) else {
            return Err(RouteError::UnknownDestination(id.clone()));
        };
        outbox
            .send(signal)
            .map_err(|_| RouteError::Closed(id.clone()))
    }
}
