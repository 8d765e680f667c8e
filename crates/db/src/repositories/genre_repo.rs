//! Repository for the `genres` table.
//!
//! Genres are ordinary database rows with full CRUD; there is no in-memory
//! genre list anywhere in the process.

use dorama_core::pagination::{Filters, Metadata};
use dorama_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::error::{with_timeout, DbError};
use crate::models::genre::{CreateGenre, Genre};
use crate::repositories::dorama_repo::collect_page;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, version, created_at";

/// Provides CRUD and filtered listing for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateGenre) -> Result<Genre, DbError> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        with_timeout(sqlx::query_as::<_, Genre>(&query).bind(&input.name).fetch_one(pool)).await
    }

    /// Fetch a genre by id, or [`DbError::NotFound`].
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Genre, DbError> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        with_timeout(sqlx::query_as::<_, Genre>(&query).bind(id).fetch_optional(pool))
            .await?
            .ok_or(DbError::NotFound)
    }

    /// Replace the name of an existing genre. Version-guarded: a concurrent
    /// modification surfaces as [`DbError::EditConflict`].
    pub async fn update(pool: &PgPool, genre: &Genre) -> Result<Genre, DbError> {
        let query = format!(
            "UPDATE genres
             SET name = $1, version = version + 1
             WHERE id = $2 AND version = $3
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, Genre>(&query)
                .bind(&genre.name)
                .bind(genre.id)
                .bind(genre.version)
                .fetch_optional(pool),
        )
        .await?
        .ok_or(DbError::EditConflict)
    }

    /// Delete a genre by id, or [`DbError::NotFound`] if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        let result =
            with_timeout(sqlx::query("DELETE FROM genres WHERE id = $1").bind(id).execute(pool))
                .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    /// List genres matching an optional full-text `name` search, ordered and
    /// paginated per `filters` (which must already be validated).
    pub async fn list(
        pool: &PgPool,
        name: &str,
        filters: &Filters,
    ) -> Result<(Vec<Genre>, Metadata), DbError> {
        let query = format!(
            "SELECT count(*) OVER() AS total_records, {COLUMNS}
             FROM genres
             WHERE (to_tsvector('simple', name) @@ plainto_tsquery('simple', $1) OR $1 = '')
             ORDER BY {} {}, id ASC
             LIMIT $2 OFFSET $3",
            filters.sort_column(),
            filters.sort_direction()
        );
        let rows: Vec<PgRow> = with_timeout(
            sqlx::query(&query)
                .bind(name)
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(pool),
        )
        .await?;

        collect_page(rows, filters)
    }
}
