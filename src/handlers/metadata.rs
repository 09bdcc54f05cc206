//! Dashboard metadata handler

use axum::{extract::State, Json};

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::MetadataResponse;
use crate::state::AppState;

/// GET /metadata - Dashboard counters for solicitudes and quejas
pub async fn get_metadata(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<MetadataResponse>, ApiError> {
    let solicitudes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM solicitudes")
        .fetch_one(&state.db_pool)
        .await?;

    let quejas_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quejas")
        .fetch_one(&state.db_pool)
        .await?;

    Ok(Json(MetadataResponse {
        solicitudes_count,
        quejas_count,
    }))
}
