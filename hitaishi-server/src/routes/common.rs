use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::AppState;
use crate::mail::Email;

/// Success wrapper shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        })
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: None,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Created {
    pub id: u64,
}

/// Send a confirmation mail; failures are logged and reported as `false`.
pub(crate) async fn deliver(state: &AppState, email: Email) -> bool {
    let to = email.to.clone();
    match state.mailer().send(email).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Mail to {} not sent: {}", to, e);
            false
        }
    }
}

/// Message for a committed write followed by a mail attempt.
pub(crate) fn outcome(action: &str, mail_sent: bool) -> String {
    if mail_sent {
        format!("{action} and confirmation email sent.")
    } else {
        format!("{action}, but the confirmation email could not be sent.")
    }
}
