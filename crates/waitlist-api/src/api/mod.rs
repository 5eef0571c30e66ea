//! HTTP API for the waitlist service.

mod handlers;
mod types;

pub use handlers::*;
pub use types::*;

use crate::registry::Registry;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The registry is constructed at startup and handed to every handler
/// through axum state; there is no process-wide singleton, and tests build
/// a fresh instance each.
#[derive(Clone)]
pub struct AppState {
    /// Waitlist signup registry
    pub registry: Arc<RwLock<Registry>>,
}

impl AppState {
    /// Create new application state around an explicit registry instance.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}

/// Create the API router.
///
/// CORS is permissive; the landing page calls these endpoints from the
/// browser.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/signup", post(handlers::create_signup))
        .route("/api/signups", get(handlers::list_signups))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
        .with_state(state)
}
