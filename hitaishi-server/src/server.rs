use crate::db::{create_pool, ensure_schema};
use crate::lang::Translations;
use crate::mail::LogMailer;
use crate::routes::{self, health};
use crate::upload::UploadStore;
use crate::{AppState, ConnectionRegistry, Relay, ServerConfig, ws_handler};
use anyhow::Context;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// The full application router around `state`.
pub fn app(state: AppState) -> Router {
    let uploads = ServeDir::new(state.uploads().dir());
    let upload_limit = state.uploads().max_bytes();

    Router::new()
        .route("/health", get(health))
        .route("/ws", get(ws_handler))
        .nest("/api", routes::router(upload_limit))
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .context("failed to connect to the database")?;
    ensure_schema(&pool)
        .await
        .context("failed to prepare the database schema")?;
    info!("Database ready");

    let uploads = UploadStore::new(&config.upload_dir).with_max_bytes(config.max_upload_bytes);
    uploads
        .ensure_dir()
        .await
        .with_context(|| format!("failed to create {}", config.upload_dir.display()))?;

    let mailer = Arc::new(LogMailer::new(config.mail_from.clone()));
    let relay = Relay::new(Arc::new(ConnectionRegistry::new()));
    let translations = Translations::new(&config.lang_dir);
    let state = AppState::new(
        pool,
        mailer,
        uploads,
        translations,
        relay,
        config.review_address.clone(),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
