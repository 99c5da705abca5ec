//! HTTP API and WebRTC signaling relay for the Hitaishi training platform.
//!
//! The binary lives in `hitaishi-cli`; this crate exposes [`serve`] plus the
//! pieces it is assembled from so tests can build the router around their
//! own state.

mod auth;
mod config;
mod error;
mod server;
mod state;
mod validation;

pub mod db;
pub mod lang;
pub mod mail;
pub mod routes;
pub mod signaling;
pub mod upload;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use server::*;
pub use signaling::*;
pub use state::*;
pub use validation::*;
