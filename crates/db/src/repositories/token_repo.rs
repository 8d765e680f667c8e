//! Repository for the `tokens` table.

use dorama_core::types::DbId;
use sqlx::PgPool;

use crate::error::{with_timeout, DbError};
use crate::models::token::Token;

/// Persists token hashes and bulk-invalidates them per scope.
pub struct TokenRepo;

impl TokenRepo {
    /// Persist a token row (the plaintext never reaches this layer).
    pub async fn insert(pool: &PgPool, token: &Token) -> Result<(), DbError> {
        with_timeout(
            sqlx::query(
                "INSERT INTO tokens (hash, user_id, expiry, scope)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(&token.hash)
            .bind(token.user_id)
            .bind(token.expiry)
            .bind(&token.scope)
            .execute(pool),
        )
        .await?;
        Ok(())
    }

    /// Remove every token of `scope` for `user_id`. Returns the count of
    /// deleted rows. Used after activation so stale activation tokens cannot
    /// be replayed.
    pub async fn delete_all_for_user(
        pool: &PgPool,
        scope: &str,
        user_id: DbId,
    ) -> Result<u64, DbError> {
        let result = with_timeout(
            sqlx::query("DELETE FROM tokens WHERE scope = $1 AND user_id = $2")
                .bind(scope)
                .bind(user_id)
                .execute(pool),
        )
        .await?;
        Ok(result.rows_affected())
    }
}
