use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a client sends over the signaling socket.
///
/// Payloads stay opaque JSON; the relay never looks inside `sdp` or
/// `candidate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientSignal {
    Offer { to: ConnectionId, sdp: Value },
    Answer { to: ConnectionId, sdp: Value },
    Candidate { to: ConnectionId, candidate: Value },
}

impl ClientSignal {
    pub fn destination(&self) -> &ConnectionId {
        match self {
            Self::Offer { to, .. } | Self::Answer { to, .. } | Self::Candidate { to, .. } => to,
        }
    }
}

/// Frames the server pushes to a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerSignal {
    /// Sent once, right after connect, with the identifier peers use to reach
    /// this connection.
    Welcome { id: ConnectionId },
    Offer { sdp: Value, from: ConnectionId },
    Answer { sdp: Value, from: ConnectionId },
    /// Raw candidate, deliberately without a `from` field.
    Candidate(Value),
}
