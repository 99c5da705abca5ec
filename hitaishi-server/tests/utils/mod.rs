pub mod recording_mailer;
pub mod recording_router;
pub mod test_peer;
pub mod ws_client;

pub use recording_mailer::*;
pub use recording_router::*;
pub use test_peer::*;
pub use ws_client::*;
