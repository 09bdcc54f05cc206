//! Catalog routes

use axum::{routing::get, Router};

use crate::handlers::catalog;
use crate::state::AppState;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/areas", get(catalog::get_areas))
        .route("/tipos-solicitud", get(catalog::get_tipos_solicitud))
        .route("/estados-solicitud", get(catalog::get_estados_solicitud))
}
