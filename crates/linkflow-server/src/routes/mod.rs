//! HTTP route handlers — matches the API surface the frontend expects.

pub mod auth;
pub mod members;
pub mod upload;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

// Multipart uploads are capped at 5 MiB by the handler; leave headroom for
// the multipart framing itself.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(members::routes())
        .merge(upload::routes())
        .merge(auth::routes())
}
