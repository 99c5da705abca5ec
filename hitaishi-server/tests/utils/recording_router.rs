use hitaishi_core::{ConnectionId, ServerSignal};
use hitaishi_server::{ConnectionRegistry, Outbox, RouteError, SignalRouter};
use std::sync::{Arc, Mutex};

/// One forwarding attempt as seen by the router.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSend {
    pub to: ConnectionId,
    pub signal: ServerSignal,
    pub result: Result<(), RouteError>,
}

/// SignalRouter that delegates to a real registry and records every send,
/// including the ones the relay swallows.
#[derive(Clone, Default)]
pub struct RecordingRouter {
    registry: ConnectionRegistry,
    sends: Arc<Mutex<Vec<RecordedSend>>>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn sends(&self) -> Vec<RecordedSend> {
        self.sends.lock().unwrap().clone()
    }

    /// Sends that did not reach anybody.
    pub fn failures(&self) -> Vec<RecordedSend> {
        self.sends()
            .into_iter()
            .filter(|s| s.result.is_err())
            .collect()
    }
}

impl SignalRouter for RecordingRouter {
    fn register(&self, id: ConnectionId, outbox: Outbox) {
        self.registry.register(id, outbox);
    }

    fn unregister(&self, id: &ConnectionId) {
        self.registry.unregister(id);
    }

    fn send(&self, id: &ConnectionId, signal: ServerSignal) -> Result<(), RouteError> {
        tracing::debug!("[RecordingRouter] send to {}", id);

        let result = self.registry.send(id, signal.clone());
        self.sends.lock().unwrap().push(RecordedSend {
            to: id.clone(),
            signal,
            result: result.clone(),
        });
        result
    }
}
