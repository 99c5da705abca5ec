use async_trait::async_trait;
use tracing::info;

use super::{Email, MailError, Mailer, is_plausible_address};

/// Writes every message to the log instead of an SMTP relay.
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        if !is_plausible_address(&email.to) {
            return Err(MailError::InvalidRecipient(email.to));
        }

        info!(
            from = %self.from,
            to = %email.to,
            subject = %email.subject,
            bytes = email.html.len(),
            "Outgoing mail"
        );
        Ok(())
    }
}
