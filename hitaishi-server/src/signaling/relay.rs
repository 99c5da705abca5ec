use crate::signaling::{Outbox, SignalRouter};
use hitaishi_core::{ClientSignal, ConnectionId, ServerSignal};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Stateless forwarder for WebRTC negotiation messages.
///
/// Everything it knows about connections lives in the router. Forwarding
/// failures are logged and swallowed; the sender never hears about them.
#[derive(Clone)]
pub struct Relay {
    router: Arc<dyn SignalRouter>,
}

impl Relay {
    pub fn new(router: Arc<dyn SignalRouter>) -> Self {
        Self { router }
    }

    /// Mint an identifier for a new connection and greet it.
    pub fn on_connect(&self, outbox: Outbox) -> ConnectionId {
        let id = ConnectionId::new();
        self.router.register(id.clone(), outbox);
        info!("Signaling connection opened: {}", id);

        self.forward(&id, ServerSignal::Welcome { id: id.clone() });
        id
    }

    pub fn on_disconnect(&self, id: &ConnectionId) {
        self.router.unregister(id);
        info!("Signaling connection closed: {}", id);
    }

    pub fn on_offer(&self, from: &ConnectionId, to: &ConnectionId, sdp: Value) {
        self.forward(
            to,
            ServerSignal::Offer {
                sdp,
                from: from.clone(),
            },
        );
    }

    pub fn on_answer(&self, from: &ConnectionId, to: &ConnectionId, sdp: Value) {
        self.forward(
            to,
            ServerSignal::Answer {
                sdp,
                from: from.clone(),
            },
        );
    }

    /// The candidate goes out without the sender's identifier.
    pub fn on_candidate(&self, _from: &ConnectionId, to: &ConnectionId, candidate: Value) {
        self.forward(to, ServerSignal::Candidate(candidate));
    }

    pub fn dispatch(&self, from: &ConnectionId, signal: ClientSignal) {
        debug!("Signal {} -> {}", from, signal.destination());
        match signal {
            ClientSignal::Offer { to, sdp } => self.on_offer(from, &to, sdp),
            ClientSignal::Answer { to, sdp } => self.on_answer(from, &to, sdp),
            ClientSignal::Candidate { to, candidate } => self.on_candidate(from, &to, candidate),
        }
    }

    fn forward(&self, to: &ConnectionId, signal: ServerSignal) {
        if let Err(e) = self.router.send(to, signal) {
            debug!("Dropping signal: {}", e);
        }
    }
}
