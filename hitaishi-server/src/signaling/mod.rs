mod connection_registry;
mod relay;
mod signal_router;
mod ws_handler;

pub use connection_registry::*;
pub use relay::*;
pub use signal_router::*;
pub use ws_handler::*;
