//! Middleware for the solicitudes/quejas API
//!
//! Request tracing, security headers, and authentication extraction.

pub mod auth;
mod security;
mod tracing;

pub use auth::AuthenticatedUser;
pub use security::{hsts_header, security_headers};
pub use tracing::request_tracing;
