use crate::lang::Translations;
use crate::mail::Mailer;
use crate::signaling::Relay;
use crate::upload::UploadStore;
use sqlx::MySqlPool;
use std::sync::Arc;

/// Handles shared by every request; cloning is a pointer copy.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: MySqlPool,
    mailer: Arc<dyn Mailer>,
    uploads: UploadStore,
    translations: Translations,
    relay: Relay,
    review_address: String,
}

impl AppState {
    pub fn new(
        pool: MySqlPool,
        mailer: Arc<dyn Mailer>,
        uploads: UploadStore,
        translations: Translations,
        relay: Relay,
        review_address: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                mailer,
                uploads,
                translations,
                relay,
                review_address: review_address.into(),
            }),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.inner.pool
    }

    pub fn mailer(&self) -> &dyn Mailer {
        self.inner.mailer.as_ref()
    }

    pub fn uploads(&self) -> &UploadStore {
        &self.inner.uploads
    }

    pub fn translations(&self) -> &Translations {
        &self.inner.translations
    }

    pub fn relay(&self) -> &Relay {
        &self.inner.relay
    }

    pub fn review_address(&self) -> &str {
        &self.inner.review_address
    }
}
