//! User listing handler

use axum::{extract::State, Json};

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::UserResponse;
use crate::state::AppState;

/// GET /users - List all registered users (sanitized, no password hashes)
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.auth_service.list_users().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
