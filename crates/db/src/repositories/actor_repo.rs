//! Repository for the `actors` table.

use dorama_core::pagination::{Filters, Metadata};
use dorama_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::error::{with_timeout, DbError};
use crate::models::actor::{Actor, CreateActor};
use crate::repositories::dorama_repo::collect_page;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, dorama_id, version, created_at";

/// Provides CRUD and filtered listing for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateActor) -> Result<Actor, DbError> {
        let query = format!(
            "INSERT INTO actors (full_name, dorama_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, Actor>(&query)
                .bind(&input.full_name)
                .bind(input.dorama_id)
                .fetch_one(pool),
        )
        .await
    }

    /// Fetch an actor by id, or [`DbError::NotFound`].
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Actor, DbError> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        with_timeout(sqlx::query_as::<_, Actor>(&query).bind(id).fetch_optional(pool))
            .await?
            .ok_or(DbError::NotFound)
    }

    /// Replace every mutable field of an existing actor. Version-guarded:
    /// a concurrent modification surfaces as [`DbError::EditConflict`].
    pub async fn update(pool: &PgPool, actor: &Actor) -> Result<Actor, DbError> {
        let query = format!(
            "UPDATE actors
             SET full_name = $1, dorama_id = $2, version = version + 1
             WHERE id = $3 AND version = $4
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, Actor>(&query)
                .bind(&actor.full_name)
                .bind(actor.dorama_id)
                .bind(actor.id)
                .bind(actor.version)
                .fetch_optional(pool),
        )
        .await?
        .ok_or(DbError::EditConflict)
    }

    /// Delete an actor by id, or [`DbError::NotFound`] if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        let result =
            with_timeout(sqlx::query("DELETE FROM actors WHERE id = $1").bind(id).execute(pool))
                .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    /// List actors matching an optional full-text `full_name` search and an
    /// optional exact `dorama_id` filter, ordered and paginated per
    /// `filters` (which must already be validated).
    pub async fn list(
        pool: &PgPool,
        full_name: &str,
        dorama_id: Option<DbId>,
        filters: &Filters,
    ) -> Result<(Vec<Actor>, Metadata), DbError> {
        let query = format!(
            "SELECT count(*) OVER() AS total_records, {COLUMNS}
             FROM actors
             WHERE (to_tsvector('simple', full_name) @@ plainto_tsquery('simple', $1) OR $1 = '')
               AND ($2::bigint IS NULL OR dorama_id = $2)
             ORDER BY {} {}, id ASC
             LIMIT $3 OFFSET $4",
            filters.sort_column(),
            filters.sort_direction()
        );
        let rows: Vec<PgRow> = with_timeout(
            sqlx::query(&query)
                .bind(full_name)
                .bind(dorama_id)
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(pool),
        )
        .await?;

        collect_page(rows, filters)
    }
}
