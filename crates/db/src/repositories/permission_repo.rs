//! Repository for the `permissions` and `users_permissions` tables.

use dorama_core::types::DbId;
use sqlx::PgPool;

use crate::error::{with_timeout, DbError};
use crate::models::permission::Permissions;

/// Resolves and grants per-user permission codes.
pub struct PermissionRepo;

impl PermissionRepo {
    /// All permission codes granted to a user.
    pub async fn get_all_for_user(pool: &PgPool, user_id: DbId) -> Result<Permissions, DbError> {
        let codes = with_timeout(
            sqlx::query_scalar::<_, String>(
                "SELECT p.code
                 FROM permissions p
                 INNER JOIN users_permissions up ON up.permission_id = p.id
                 WHERE up.user_id = $1",
            )
            .bind(user_id)
            .fetch_all(pool),
        )
        .await?;
        Ok(codes.into())
    }

    /// Grant the listed permission codes to a user. Codes that do not exist
    /// in the `permissions` table are silently skipped.
    pub async fn add_for_user(
        pool: &PgPool,
        user_id: DbId,
        codes: &[&str],
    ) -> Result<(), DbError> {
        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        with_timeout(
            sqlx::query(
                "INSERT INTO users_permissions (user_id, permission_id)
                 SELECT $1, p.id FROM permissions p WHERE p.code = ANY($2)",
            )
            .bind(user_id)
            .bind(&codes)
            .execute(pool),
        )
        .await?;
        Ok(())
    }
}
