//! Route definitions for the solicitudes/quejas API

mod auth;
mod catalog;
mod quejas;
mod solicitudes;
mod upload;
mod users;

pub use auth::auth_routes;
pub use catalog::catalog_routes;
pub use quejas::queja_routes;
pub use solicitudes::solicitud_routes;
pub use upload::upload_routes;
pub use users::user_routes;

use axum::{routing::get, Json, Router};

use crate::db;
use crate::middleware;
use crate::state::AppState;

/// Assemble the full application router with its middleware stack
///
/// CORS and HSTS layers are environment-dependent and applied in `main`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(catalog_routes())
        .merge(solicitud_routes())
        .merge(queja_routes())
        .merge(upload_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
}

async fn root() -> &'static str {
    "Solicitudes y Quejas API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthResponse> {
    let db_status = match db::check_health(&state.db_pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if db_status == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database: db_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
