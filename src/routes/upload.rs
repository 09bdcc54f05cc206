//! Upload routes

use axum::{routing::post, Router};

use crate::handlers::upload;
use crate::state::AppState;

/// Create upload routes
///
/// The upload endpoint is unauthenticated, matching the original contract.
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload/", post(upload::upload))
}
