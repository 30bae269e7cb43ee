use crate::config::{RuntimeKind, ServerConfig};
use crate::host::{ActorHost, RelayHost, SharedHost};
use crate::photos::{DiskPhotoStore, PhotoStore, list_photos, upload_photo};
use crate::transport::ws_handler;
use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState<H> {
    pub host: H,
    pub photos: Arc<dyn PhotoStore>,
    pub send_timeout: Duration,
}

pub fn router<H: RelayHost>(
    state: AppState<H>,
    uploads_dir: &Path,
    max_upload_bytes: usize,
) -> Router {
    Router::new()
        .route("/ws", get(ws_handler::<H>))
        .route(
            "/upload-photo",
            post(upload_photo::<H>).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/photos", get(list_photos::<H>))
        .route("/health", get(|| async { "ok" }))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the listener fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let photos = DiskPhotoStore::open(&config.uploads_dir)
        .await
        .with_context(|| format!("failed to open {}", config.uploads_dir.display()))?;
    let photos: Arc<dyn PhotoStore> = Arc::new(photos);

    let addr = (config.host, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    info!("Signaling relay listening on http://{}", listener.local_addr()?);

    match config.runtime {
        RuntimeKind::Shared => {
            let state = AppState {
                host: SharedHost::new(),
                photos,
                send_timeout: config.send_timeout(),
            };
            run(listener, state, &config).await
        }
        RuntimeKind::Actor => {
            let state = AppState {
                host: ActorHost::spawn(config.actor_queue),
                photos,
                send_timeout: config.send_timeout(),
            };
            run(listener, state, &config).await
        }
    }
}

async fn run<H: RelayHost>(
    listener: TcpListener,
    state: AppState<H>,
    config: &ServerConfig,
) -> anyhow::Result<()> {
    let app = router(state, &config.uploads_dir, config.max_upload_bytes);
    axum::serve(listener, app).await.context("server error")
}
