//! Registration and session integration tests
//!
//! These exercise the persistence-backed properties: duplicate conflicts,
//! user-count invariants, and the refresh/rotation/revocation lifecycle.
//! They need a PostgreSQL instance reachable via `DATABASE_URL_TEST` with the
//! migrations applied, so they are `#[ignore]`d by default:
//!
//! ```text
//! DATABASE_URL_TEST=postgresql://localhost/soliq_test cargo test -- --ignored
//! ```

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use soliq_server::auth::{AuthError, AuthService};

/// Helper to create a test database pool
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL_TEST")
        .unwrap_or_else(|_| "postgresql://localhost/soliq_test".to_string());

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

fn auth_service(pool: &PgPool) -> Arc<AuthService> {
    Arc::new(AuthService::new(
        pool.clone(),
        "integration-test-secret".to_string(),
        900,
        7,
    ))
}

async fn user_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("count query")
}

/// Random username so repeated runs never collide
fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Requires database setup
async fn register_creates_exactly_one_user() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let username = unique_username("jhondoe");
    let before = user_count(&pool).await;

    let user = service.register(&username, "jhondoe").await.unwrap();

    let after = user_count(&pool).await;
    assert_eq!(after, before + 1);
    assert_eq!(user.username, username);

    // The new username appears in a full listing
    let listed = service.list_users().await.unwrap();
    assert!(listed.iter().any(|u| u.username == username));

    // The password is stored hashed, never in plaintext
    assert_ne!(user.password_hash, "jhondoe");
}

#[tokio::test]
#[ignore] // Requires database setup
async fn duplicate_registration_conflicts_and_writes_nothing() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let username = unique_username("duplicated");
    service.register(&username, "duplicated").await.unwrap();

    let before = user_count(&pool).await;
    let result = service.register(&username, "duplicated").await;

    assert!(matches!(result, Err(AuthError::UsernameTaken(_))));
    assert_eq!(user_count(&pool).await, before);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn empty_credentials_are_rejected_without_writes() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let before = user_count(&pool).await;

    assert!(matches!(
        service.register("", "pwd").await,
        Err(AuthError::MissingCredentials)
    ));
    assert!(matches!(
        service.register("tomas", "").await,
        Err(AuthError::MissingCredentials)
    ));
    assert!(matches!(
        service.register("", "").await,
        Err(AuthError::MissingCredentials)
    ));

    assert_eq!(user_count(&pool).await, before);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn login_issues_tokens_and_rejects_wrong_password() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let username = unique_username("login");
    service.register(&username, "correct-pwd").await.unwrap();

    let tokens = service.login(&username, "correct-pwd").await.unwrap();
    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
    assert_eq!(tokens.token_type, "Bearer");
    assert_eq!(tokens.user.username, username);

    assert!(matches!(
        service.login(&username, "wrong-pwd").await,
        Err(AuthError::InvalidCredentials)
    ));

    // Unknown users get the same error as wrong passwords
    assert!(matches!(
        service.login(&unique_username("ghost"), "pwd").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
#[ignore] // Requires database setup
async fn refresh_rotates_and_invalidates_old_token() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let username = unique_username("refresh");
    service.register(&username, "pwd").await.unwrap();
    let tokens = service.login(&username, "pwd").await.unwrap();

    let refreshed = service.refresh_tokens(&tokens.refresh_token).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
    assert_ne!(refreshed.refresh_token, tokens.refresh_token);

    // The presented refresh token was rotated away; replaying it fails
    assert!(matches!(
        service.refresh_tokens(&tokens.refresh_token).await,
        Err(AuthError::SessionNotFound)
    ));

    // The rotated token still works
    assert!(service.refresh_tokens(&refreshed.refresh_token).await.is_ok());
}

#[tokio::test]
#[ignore] // Requires database setup
async fn logout_revokes_the_session() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let username = unique_username("logout");
    service.register(&username, "pwd").await.unwrap();
    let tokens = service.login(&username, "pwd").await.unwrap();

    let claims =
        soliq_server::auth::verify_token(&tokens.access_token, "integration-test-secret").unwrap();

    service.revoke_session(&claims.jti).await.unwrap();

    // A revoked session fails verification and refresh
    assert!(matches!(
        service.verify_session(&claims.jti).await,
        Err(AuthError::SessionNotFound)
    ));
    assert!(matches!(
        service.refresh_tokens(&tokens.refresh_token).await,
        Err(AuthError::SessionNotFound)
    ));

    // Revoking twice is an error
    assert!(matches!(
        service.revoke_session(&claims.jti).await,
        Err(AuthError::SessionNotFound)
    ));
}

#[tokio::test]
#[ignore] // Requires database setup
async fn access_token_is_not_a_refresh_token() {
    let pool = setup_test_db().await;
    let service = auth_service(&pool);

    let username = unique_username("tokentype");
    service.register(&username, "pwd").await.unwrap();
    let tokens = service.login(&username, "pwd").await.unwrap();

    // An access token presented for refresh is rejected
    assert!(matches!(
        service.refresh_tokens(&tokens.access_token).await,
        Err(AuthError::InvalidRefreshToken)
    ));
}
