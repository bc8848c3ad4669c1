//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use demerit_core::{DemeritConfig, DemeritError};
use demerit_engine::Catalog;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handbook::HandbookStore;
use crate::routes;

/// Shared state for the gateway server. Everything here is immutable
/// after startup, so handlers share it through a plain `Arc`.
pub struct AppState {
    pub config: DemeritConfig,
    /// Category catalog: titles, focus keywords, FAQ tables.
    pub catalog: Catalog,
    /// Handbook text, `None` when the file could not be read at startup.
    pub handbook: Option<HandbookStore>,
    pub start_time: std::time::Instant,
}

pub fn build_router(state: AppState) -> Router {
    build_router_from_arc(Arc::new(state))
}

pub fn build_router_from_arc(shared: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/api/ask-handbook", post(routes::ask_handbook))
        .route("/api/chatbot/ask", post(routes::ask_chatbot))
        .route("/api/chatbot/categories", get(routes::list_categories))
        .layer({
            let cors = CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(3600));

            // Restrict CORS origins in production via env var
            // Example: DEMERIT_CORS_ORIGINS=https://portal.school.edu
            if let Ok(origins_str) = std::env::var("DEMERIT_CORS_ORIGINS") {
                let origins: Vec<_> = origins_str
                    .split(',')
                    .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
                    .collect();
                cors.allow_origin(origins)
            } else {
                cors.allow_origin(Any)
            }
        })
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server and serve until the process exits.
pub async fn start(config: DemeritConfig) -> anyhow::Result<()> {
    let handbook_path = config.handbook.resolved_path();
    let handbook = match HandbookStore::open(&handbook_path) {
        Ok(store) => {
            tracing::info!(
                "📚 Handbook loaded: {} ({} chars)",
                store.path().display(),
                store.char_count()
            );
            Some(store)
        }
        Err(e) => {
            tracing::warn!("⚠️ Handbook not available: {e}");
            None
        }
    };

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let state = AppState {
        config,
        catalog: Catalog::standard(),
        handbook,
        start_time: std::time::Instant::now(),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DemeritError::Gateway(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("🌐 Gateway server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
