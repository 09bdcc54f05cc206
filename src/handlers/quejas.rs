//! Queja creation handler

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{ApiMessage, CreateQuejaRequest, Queja};
use crate::state::AppState;

/// POST /quejas/ - Create a new queja
pub async fn create_queja(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<CreateQuejaRequest>,
) -> Result<(StatusCode, Json<ApiMessage<Queja>>), ApiError> {
    req.validate()?;

    let queja: Queja = sqlx::query_as(
        r#"
        INSERT INTO quejas (descripcion, user_id)
        VALUES ($1, $2)
        RETURNING id_queja, descripcion, user_id, created_at
        "#,
    )
    .bind(&req.descripcion)
    .bind(user.user_id)
    .fetch_one(&state.db_pool)
    .await?;

    tracing::info!(
        id_queja = queja.id_queja,
        username = %user.username,
        "Queja created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::success("Queja creada correctamente", queja)),
    ))
}
