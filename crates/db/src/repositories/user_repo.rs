//! Repository for the `users` table.

use dorama_core::types::DbId;
use sqlx::PgPool;

use crate::error::{with_timeout, DbError};
use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, activated, version, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row. Users start inactive.
    ///
    /// A unique violation on the email column fails with
    /// [`DbError::DuplicateEmail`].
    pub async fn insert(pool: &PgPool, input: &CreateUser) -> Result<User, DbError> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, User>(&query)
                .bind(&input.name)
                .bind(&input.email)
                .bind(&input.password_hash)
                .fetch_one(pool),
        )
        .await
    }

    /// Fetch a user by id, or [`DbError::NotFound`].
    pub async fn get(pool: &PgPool, id: DbId) -> Result<User, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        with_timeout(sqlx::query_as::<_, User>(&query).bind(id).fetch_optional(pool))
            .await?
            .ok_or(DbError::NotFound)
    }

    /// Find a user by email (case-sensitive).
    pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        with_timeout(sqlx::query_as::<_, User>(&query).bind(email).fetch_optional(pool)).await
    }

    /// Replace the mutable fields of an existing user. Version-guarded: a
    /// concurrent modification surfaces as [`DbError::EditConflict`].
    pub async fn update(pool: &PgPool, user: &User) -> Result<User, DbError> {
        let query = format!(
            "UPDATE users
             SET name = $1, email = $2, password_hash = $3, activated = $4,
                 version = version + 1
             WHERE id = $5 AND version = $6
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, User>(&query)
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.password_hash)
                .bind(user.activated)
                .bind(user.id)
                .bind(user.version)
                .fetch_optional(pool),
        )
        .await?
        .ok_or(DbError::EditConflict)
    }

    /// Resolve the user owning an unexpired token with the given scope and
    /// hash. A missing row and an expired token are indistinguishable to the
    /// caller.
    pub async fn get_for_token(
        pool: &PgPool,
        scope: &str,
        token_hash: &str,
    ) -> Result<Option<User>, DbError> {
        let query = "SELECT u.id, u.name, u.email, u.password_hash, u.activated, u.version, \
                     u.created_at
                     FROM users u
                     INNER JOIN tokens t ON u.id = t.user_id
                     WHERE t.hash = $1 AND t.scope = $2 AND t.expiry > now()";
        with_timeout(
            sqlx::query_as::<_, User>(query)
                .bind(token_hash)
                .bind(scope)
                .fetch_optional(pool),
        )
        .await
    }
}
