//! Authentication service
//!
//! Core business logic for username/password authentication and session
//! management.

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AuthSession, AuthTokensResponse, User};

use super::jwt::{generate_access_token, generate_refresh_token, verify_token, JwtError};
use super::password::{hash_password, verify_password};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Session not found or revoked")]
    SessionNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Password hashing error: {0}")]
    PasswordHashError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db_pool: PgPool,
    jwt_secret: String,
    access_token_ttl_seconds: i64,
    refresh_token_ttl_days: i64,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        db_pool: PgPool,
        jwt_secret: String,
        access_token_ttl_seconds: i64,
        refresh_token_ttl_days: i64,
    ) -> Self {
        Self {
            db_pool,
            jwt_secret,
            access_token_ttl_seconds,
            refresh_token_ttl_days,
        }
    }

    /// Register a new user
    ///
    /// Usernames are stored and compared exactly as submitted (case-sensitive,
    /// untrimmed). The pre-insert lookup gives the friendly conflict message;
    /// the unique index on `username` is the actual guarantee, so a lost race
    /// still maps to [`AuthError::UsernameTaken`] and never leaves a partial
    /// write.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let existing: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db_pool)
        .await?;

        if existing.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let password_hash = hash_password(password)?;
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(username)
        .bind(&password_hash)
        .bind(now)
        .execute(&self.db_pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map_or(false, |db| db.is_unique_violation())
            {
                AuthError::UsernameTaken(username.to_string())
            } else {
                AuthError::DatabaseError(e.to_string())
            }
        })?;

        tracing::info!(username = %username, "User registered");

        Ok(User {
            id: user_id,
            username: username.to_string(),
            password_hash,
            created_at: now,
        })
    }

    /// Verify credentials and issue a token pair
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthTokensResponse, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user: User = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_tokens(&user).await
    }

    /// Issue a fresh token pair and create the backing session
    async fn issue_tokens(&self, user: &User) -> Result<AuthTokensResponse, AuthError> {
        let jti = Uuid::new_v4().to_string();
        let access_token =
            generate_access_token(user, &jti, &self.jwt_secret, self.access_token_ttl_seconds)?;

        let refresh_token = generate_refresh_token(
            user,
            &jti,
            &self.jwt_secret,
            self.refresh_token_ttl_days,
        )?;

        // Refresh tokens are stored hashed only
        let refresh_token_hash = hash_token(&refresh_token);
        let session_expires_at = Utc::now() + Duration::days(self.refresh_token_ttl_days);

        sqlx::query(
            r#"
            INSERT INTO auth_sessions (id, user_id, jti, refresh_token_hash, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(&jti)
        .bind(&refresh_token_hash)
        .bind(session_expires_at)
        .execute(&self.db_pool)
        .await?;

        Ok(AuthTokensResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl_seconds,
            user: user.clone().into(),
        })
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The stored token is rotated: after a successful exchange the presented
    /// refresh token is no longer valid.
    pub async fn refresh_tokens(
        &self,
        refresh_token: &str,
    ) -> Result<AuthTokensResponse, AuthError> {
        let claims = verify_token(refresh_token, &self.jwt_secret)?;

        if claims.token_type != "refresh" {
            return Err(AuthError::InvalidRefreshToken);
        }

        let refresh_token_hash = hash_token(refresh_token);

        let session: AuthSession = sqlx::query_as(
            r#"
            SELECT id, user_id, jti, refresh_token_hash, expires_at, revoked, revoked_at, created_at, updated_at
            FROM auth_sessions
            WHERE refresh_token_hash = $1 AND revoked = FALSE AND expires_at > NOW()
            "#,
        )
        .bind(&refresh_token_hash)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::SessionNotFound)?;

        let user = self.get_user_by_id(session.user_id).await?;

        let jti = Uuid::new_v4().to_string();
        let access_token =
            generate_access_token(&user, &jti, &self.jwt_secret, self.access_token_ttl_seconds)?;

        let new_refresh_token = generate_refresh_token(
            &user,
            &jti,
            &self.jwt_secret,
            self.refresh_token_ttl_days,
        )?;

        let new_refresh_token_hash = hash_token(&new_refresh_token);
        let session_expires_at = Utc::now() + Duration::days(self.refresh_token_ttl_days);

        sqlx::query(
            r#"
            UPDATE auth_sessions
            SET jti = $1, refresh_token_hash = $2, expires_at = $3, updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(&jti)
        .bind(&new_refresh_token_hash)
        .bind(session_expires_at)
        .bind(session.id)
        .execute(&self.db_pool)
        .await?;

        Ok(AuthTokensResponse {
            access_token,
            refresh_token: new_refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl_seconds,
            user: user.into(),
        })
    }

    /// Revoke a session (logout)
    pub async fn revoke_session(&self, jti: &str) -> Result<(), AuthError> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE auth_sessions
            SET revoked = TRUE, revoked_at = NOW()
            WHERE jti = $1 AND revoked = FALSE
            "#,
        )
        .bind(jti)
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AuthError::SessionNotFound);
        }

        Ok(())
    }

    /// Verify a session is valid (not revoked)
    pub async fn verify_session(&self, jti: &str) -> Result<AuthSession, AuthError> {
        sqlx::query_as(
            r#"
            SELECT id, user_id, jti, refresh_token_hash, expires_at, revoked, revoked_at, created_at, updated_at
            FROM auth_sessions
            WHERE jti = $1 AND revoked = FALSE AND expires_at > NOW()
            "#,
        )
        .bind(jti)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::SessionNotFound)
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, AuthError> {
        sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(users)
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get database pool (for handler access)
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }
}

/// Hash a token for storage
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_stable_and_opaque() {
        let token = "some.refresh.token";
        let a = hash_token(token);
        let b = hash_token(token);
        assert_eq!(a, b);
        assert_ne!(a, token);
        // SHA-256 hex digest
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_hash_token_distinguishes_tokens() {
        assert_ne!(hash_token("token-a"), hash_token("token-b"));
    }
}
