use async_trait::async_trait;
use hitaishi_server::mail::{Email, MailError, Mailer};
use std::sync::{Arc, Mutex};

/// Mailer that keeps every message instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Mailer whose transport is always down.
#[derive(Clone, Copy, Default)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: Email) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_owned()))
    }
}
