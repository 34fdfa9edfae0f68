//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Banner
        .route("/", get(handlers::root))
        // Diagnostics
        .route("/test", get(handlers::diagnostics))
        // Lead capture
        .route("/api/trade-account", post(handlers::create_trade_account))
        .route("/api/quote", post(handlers::create_quote))
        // Contact email acknowledgement
        .route("/api/email/auto-reply", post(handlers::email_auto_reply))
        .with_state(state)
}
