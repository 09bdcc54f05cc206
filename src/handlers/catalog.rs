//! Catalog read handlers
//!
//! Enumeration data consumed by the solicitud form: areas, tipos de
//! solicitud, and estados de solicitud. All reads require a valid access
//! token.

use axum::{extract::State, Json};

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{Area, EstadoSolicitud, TipoSolicitud};
use crate::state::AppState;

/// GET /areas - List all areas
pub async fn get_areas(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Area>>, ApiError> {
    let areas: Vec<Area> = sqlx::query_as(
        r#"
        SELECT id_area, nombre FROM areas ORDER BY id_area
        "#,
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(areas))
}

/// GET /tipos-solicitud - List all solicitud types
pub async fn get_tipos_solicitud(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<TipoSolicitud>>, ApiError> {
    let tipos: Vec<TipoSolicitud> = sqlx::query_as(
        r#"
        SELECT id_tipo_solicitud, nombre FROM tipos_solicitud ORDER BY id_tipo_solicitud
        "#,
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(tipos))
}

/// GET /estados-solicitud - List all solicitud states
pub async fn get_estados_solicitud(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<EstadoSolicitud>>, ApiError> {
    let estados: Vec<EstadoSolicitud> = sqlx::query_as(
        r#"
        SELECT id_estado, nombre FROM estados_solicitud ORDER BY id_estado
        "#,
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(estados))
}
