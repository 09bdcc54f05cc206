//! Password hashing and verification
//!
//! bcrypt with the library default cost. Hashes are self-describing, so the
//! cost can be raised later without invalidating stored credentials.

use bcrypt::{hash, verify, DEFAULT_COST};

use super::service::AuthError;

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| AuthError::PasswordHashError(e.to_string()))
}

/// Verify a plaintext password against a stored hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    verify(password, password_hash).map_err(|e| AuthError::PasswordHashError(e.to_string()))
}
