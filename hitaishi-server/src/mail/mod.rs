//! Outbound transactional mail.
//!
//! Handlers render an [`Email`] from a template and hand it to the
//! [`Mailer`] in `AppState`. Delivery failures never undo the write that
//! triggered the message.

mod log_mailer;
pub mod templates;

pub use log_mailer::LogMailer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid recipient '{0}'")]
    InvalidRecipient(String),

    #[error("mail transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Minimal shape check: one `@` with something on both sides and a dot in
/// the domain.
pub fn is_plausible_address(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !domain.contains('@')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
