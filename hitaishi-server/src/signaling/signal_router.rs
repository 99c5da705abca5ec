use hitaishi_core::{ConnectionId, ServerSignal};
use thiserror::Error;
use tokio::sync::mpsc;

/// Outbound queue of a single connection; the transport drains it into the socket.
pub type Outbox = mpsc::UnboundedSender<ServerSignal>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no connection registered as {0}")]
    UnknownDestination(ConnectionId),

    #[error("connection {0} is no longer reading")]
    Closed(ConnectionId),
}

/// Addressing capability the relay forwards through.
///
/// Implemented by [`ConnectionRegistry`](crate::ConnectionRegistry) for live
/// sockets; tests plug in their own recorder.
pub trait SignalRouter: Send + Sync {
    /// Make `id` reachable through `outbox`.
    fn register(&self, id: ConnectionId, outbox: Outbox);

    /// Forget `id`; later sends to it fail with [`RouteError::UnknownDestination`].
    fn unregister(&self, id: &ConnectionId);

    /// Deliver `signal` to exactly one connection.
    fn send(&self, id: &ConnectionId, signal: ServerSignal) -> Result<(), RouteError>;
}
