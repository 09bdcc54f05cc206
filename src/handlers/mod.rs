//! API handlers for the solicitudes/quejas backend

pub mod auth;
pub mod catalog;
pub mod metadata;
pub mod quejas;
pub mod solicitudes;
pub mod upload;
pub mod users;

// Re-export AuthenticatedUser from middleware for handler use
pub use crate::middleware::auth::AuthenticatedUser;
