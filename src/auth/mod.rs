//! Authentication module
//!
//! Username/password authentication with JWT sessions:
//! - bcrypt password hashing at registration, verification at login
//! - JWT access/refresh token generation and validation
//! - Session management with rotated, hashed refresh tokens

mod jwt;
mod password;
mod service;

pub use jwt::{generate_access_token, generate_refresh_token, verify_token, Claims, JwtError};
pub use password::{hash_password, verify_password};
pub use service::{AuthError, AuthService};
