//! Authentication HTTP handlers
//!
//! Registration, login, token refresh, and logout.

use axum::{extract::State, http::StatusCode, Json};

use super::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::{
    AuthTokensResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, RegisterResponse,
    UserResponse,
};
use crate::state::AppState;

/// Pull both credential fields out of a request, rejecting missing or empty
/// values with the same error class (missing username, missing password, and
/// missing both all map to one 400).
fn require_credentials(
    user: Option<String>,
    pwd: Option<String>,
) -> Result<(String, String), ApiError> {
    match (user, pwd) {
        (Some(user), Some(pwd)) if !user.is_empty() && !pwd.is_empty() => Ok((user, pwd)),
        _ => Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        )),
    }
}

/// POST /register - Create a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (username, password) = require_credentials(req.user, req.pwd)?;

    let user = state.auth_service.register(&username, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: format!("User '{}' created", user.username),
            user: user.into(),
        }),
    ))
}

/// POST /auth - Verify credentials and issue tokens
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthTokensResponse>, ApiError> {
    let (username, password) = require_credentials(req.user, req.pwd)?;

    let tokens = state.auth_service.login(&username, &password).await?;

    Ok(Json(tokens))
}

/// POST /auth/refresh - Exchange a refresh token for a new token pair
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<AuthTokensResponse>, ApiError> {
    let tokens = state.auth_service.refresh_tokens(&req.refresh_token).await?;

    Ok(Json(tokens))
}

/// POST /auth/logout - Revoke current session
pub async fn logout(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<StatusCode, ApiError> {
    state.auth_service.revoke_session(&user.jti).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth_service.get_user_by_id(user.user_id).await?;

    Ok(Json(user.into()))
}
