//! Solicitudes y Quejas backend library
//!
//! Exports the core modules for the solicitudes/quejas API server:
//! registration and JWT session auth, catalog reads, solicitud/queja
//! creation, uploads, and dashboard metadata.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
