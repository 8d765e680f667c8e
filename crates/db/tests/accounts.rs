//! Integration tests for the account repositories.
//!
//! Exercises users, tokens and permissions against a real database:
//! - Duplicate email classification
//! - Token lifecycle (issue, resolve, expire, bulk delete)
//! - Permission grants and lookups

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use dorama_db::error::DbError;
use dorama_db::models::token::{Token, SCOPE_ACTIVATION, SCOPE_AUTHENTICATION};
use dorama_db::models::user::{CreateUser, User};
use dorama_db::repositories::{PermissionRepo, TokenRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake$hash".to_string(),
    }
}

fn new_token(user: &User, scope: &str, hash: &str, hours: i64) -> Token {
    Token {
        hash: hash.to_string(),
        user_id: user.id,
        expiry: Utc::now() + Duration::hours(hours),
        scope: scope.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: User insert and duplicate email
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_insert_defaults(pool: PgPool) {
    let user = UserRepo::insert(&pool, &new_user("alice@example.com")).await.unwrap();
    assert!(!user.activated);
    assert_eq!(user.version, 1);

    let found = UserRepo::get_by_email(&pool, "alice@example.com").await.unwrap();
    assert_eq!(found.unwrap().id, user.id);

    let missing = UserRepo::get_by_email(&pool, "nobody@example.com").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_is_classified(pool: PgPool) {
    UserRepo::insert(&pool, &new_user("bob@example.com")).await.unwrap();
    assert_matches!(
        UserRepo::insert(&pool, &new_user("bob@example.com")).await,
        Err(DbError::DuplicateEmail)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_stale_version_is_edit_conflict(pool: PgPool) {
    let user = UserRepo::insert(&pool, &new_user("carol@example.com")).await.unwrap();

    let mut first = UserRepo::get(&pool, user.id).await.unwrap();
    let mut second = UserRepo::get(&pool, user.id).await.unwrap();

    first.activated = true;
    UserRepo::update(&pool, &first).await.unwrap();

    second.name = "Carol".to_string();
    assert_matches!(UserRepo::update(&pool, &second).await, Err(DbError::EditConflict));
}

// ---------------------------------------------------------------------------
// Test: Token lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_resolves_user(pool: PgPool) {
    let user = UserRepo::insert(&pool, &new_user("dan@example.com")).await.unwrap();
    TokenRepo::insert(&pool, &new_token(&user, SCOPE_AUTHENTICATION, "hash-a", 24))
        .await
        .unwrap();

    let resolved = UserRepo::get_for_token(&pool, SCOPE_AUTHENTICATION, "hash-a")
        .await
        .unwrap();
    assert_eq!(resolved.unwrap().id, user.id);

    // Wrong scope does not resolve.
    let wrong_scope = UserRepo::get_for_token(&pool, SCOPE_ACTIVATION, "hash-a")
        .await
        .unwrap();
    assert!(wrong_scope.is_none());

    // Unknown hash does not resolve.
    let unknown = UserRepo::get_for_token(&pool, SCOPE_AUTHENTICATION, "hash-x")
        .await
        .unwrap();
    assert!(unknown.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_token_does_not_resolve(pool: PgPool) {
    let user = UserRepo::insert(&pool, &new_user("eve@example.com")).await.unwrap();
    TokenRepo::insert(&pool, &new_token(&user, SCOPE_ACTIVATION, "hash-old", -1))
        .await
        .unwrap();

    let resolved = UserRepo::get_for_token(&pool, SCOPE_ACTIVATION, "hash-old")
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_all_for_user_scoped(pool: PgPool) {
    let user = UserRepo::insert(&pool, &new_user("frank@example.com")).await.unwrap();
    TokenRepo::insert(&pool, &new_token(&user, SCOPE_ACTIVATION, "act-1", 72))
        .await
        .unwrap();
    TokenRepo::insert(&pool, &new_token(&user, SCOPE_ACTIVATION, "act-2", 72))
        .await
        .unwrap();
    TokenRepo::insert(&pool, &new_token(&user, SCOPE_AUTHENTICATION, "auth-1", 24))
        .await
        .unwrap();

    let deleted = TokenRepo::delete_all_for_user(&pool, SCOPE_ACTIVATION, user.id)
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    // Authentication tokens are untouched.
    let still_there = UserRepo::get_for_token(&pool, SCOPE_AUTHENTICATION, "auth-1")
        .await
        .unwrap();
    assert!(still_there.is_some());
}

// ---------------------------------------------------------------------------
// Test: Permissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_permission_grant_and_lookup(pool: PgPool) {
    let user = UserRepo::insert(&pool, &new_user("grace@example.com")).await.unwrap();

    let none = PermissionRepo::get_all_for_user(&pool, user.id).await.unwrap();
    assert!(!none.includes("movies:read"));

    PermissionRepo::add_for_user(&pool, user.id, &["movies:read"]).await.unwrap();
    let perms = PermissionRepo::get_all_for_user(&pool, user.id).await.unwrap();
    assert!(perms.includes("movies:read"));
    assert!(!perms.includes("movies:write"));

    // Unknown codes are skipped silently.
    PermissionRepo::add_for_user(&pool, user.id, &["movies:write", "no:such"])
        .await
        .unwrap();
    let perms = PermissionRepo::get_all_for_user(&pool, user.id).await.unwrap();
    assert!(perms.includes("movies:write"));
    assert!(!perms.includes("no:such"));
}
