//! Solicitud creation handler

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{ApiMessage, CreateSolicitudRequest, Solicitud};
use crate::state::AppState;

/// POST /solicitudes/ - Create a new solicitud
///
/// Catalog references must exist; a dangling foreign key maps to 422 rather
/// than a 500.
pub async fn create_solicitud(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<CreateSolicitudRequest>,
) -> Result<(StatusCode, Json<ApiMessage<Solicitud>>), ApiError> {
    req.validate()?;

    let solicitud: Solicitud = sqlx::query_as(
        r#"
        INSERT INTO solicitudes (id_area, id_tipo_solicitud, id_estado, descripcion, user_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id_solicitud, id_area, id_tipo_solicitud, id_estado, descripcion, user_id, created_at
        "#,
    )
    .bind(req.id_area)
    .bind(req.id_tipo_solicitud)
    .bind(req.id_estado)
    .bind(&req.descripcion)
    .bind(user.user_id)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .map_or(false, |db| db.is_foreign_key_violation())
        {
            ApiError::UnprocessableEntity("Unknown area, tipo or estado reference".to_string())
        } else {
            ApiError::from(e)
        }
    })?;

    tracing::info!(
        id_solicitud = solicitud.id_solicitud,
        username = %user.username,
        "Solicitud created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::success("Solicitud creada correctamente", solicitud)),
    ))
}
