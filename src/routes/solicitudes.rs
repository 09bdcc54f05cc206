//! Solicitud routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{metadata, solicitudes};
use crate::state::AppState;

/// Create solicitud routes (including the dashboard metadata read)
pub fn solicitud_routes() -> Router<AppState> {
    Router::new()
        .route("/solicitudes/", post(solicitudes::create_solicitud))
        .route("/metadata", get(metadata::get_metadata))
}
