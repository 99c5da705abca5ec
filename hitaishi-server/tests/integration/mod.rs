pub mod api_tests;
pub mod relay_tests;

use hitaishi_server::db::create_lazy_pool;
use hitaishi_server::lang::Translations;
use hitaishi_server::mail::Mailer;
use hitaishi_server::upload::UploadStore;
use hitaishi_server::{AppState, ConnectionRegistry, Relay};
use sqlx::MySqlPool;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tracing::Level;

use crate::utils::{RecordingMailer, RecordingRouter, spawn_app};

/// Nothing listens here; requests that reach the database fail.
pub const UNREACHABLE_DATABASE: &str = "mysql://nobody@127.0.0.1:1/hitaishi";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_relay() -> (Relay, RecordingRouter) {
    let router = RecordingRouter::new();
    let relay = Relay::new(Arc::new(router.clone()));
    (relay, router)
}

/// Lazy pool against [`UNREACHABLE_DATABASE`] that gives up quickly, so a
/// request that gets past validation answers 500 instead of hanging.
pub fn create_unreachable_pool() -> MySqlPool {
    create_lazy_pool(UNREACHABLE_DATABASE, 1, Duration::from_millis(250)).expect("lazy pool")
}

/// State around a pool that never connects. Must be called inside a runtime.
pub fn create_test_state(
    uploads: UploadStore,
    lang_dir: &Path,
    mailer: Arc<dyn Mailer>,
) -> AppState {
    create_test_state_with_registry(uploads, lang_dir, mailer, ConnectionRegistry::new())
}

/// Like [`create_test_state`], keeping a handle on the relay's registry.
pub fn create_test_state_with_registry(
    uploads: UploadStore,
    lang_dir: &Path,
    mailer: Arc<dyn Mailer>,
    registry: ConnectionRegistry,
) -> AppState {
    AppState::new(
        create_unreachable_pool(),
        mailer,
        uploads,
        Translations::new(lang_dir),
        Relay::new(Arc::new(registry)),
        "review@hitaishi.in",
    )
}

/// App served on a local port, with a handle on its connection registry.
/// Keep the returned directory alive for the duration of the test.
pub async fn spawn_ws_app() -> (SocketAddr, ConnectionRegistry, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let registry = ConnectionRegistry::new();
    let state = create_test_state_with_registry(
        UploadStore::new(dir.path()),
        dir.path(),
        Arc::new(RecordingMailer::new()),
        registry.clone(),
    );

    (spawn_app(state).await, registry, dir)
}

/// Poll until `check` holds or a second has passed.
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
