//! Queja routes

use axum::{routing::post, Router};

use crate::handlers::quejas;
use crate::state::AppState;

/// Create queja routes
pub fn queja_routes() -> Router<AppState> {
    Router::new().route("/quejas/", post(quejas::create_queja))
}
