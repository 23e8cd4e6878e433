//! Route definitions for the dashboard.

use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/healthz", get(handlers::healthz))
        .route("/{entity}", get(handlers::listing))
        .route("/{entity}/export.csv", get(handlers::export))
        .with_state(state)
}
