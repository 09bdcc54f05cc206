//! User routes

use axum::{routing::get, Router};

use crate::handlers::users;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(users::list_users))
}
