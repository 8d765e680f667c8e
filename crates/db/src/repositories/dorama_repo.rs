//! Repository for the `doramas` table.

use dorama_core::pagination::{Filters, Metadata};
use dorama_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::error::{with_timeout, DbError};
use crate::models::dorama::{CreateDorama, Dorama};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, release_year, duration, main_actors, genre_id, \
                       version, created_at";

/// Provides CRUD and filtered listing for doramas.
pub struct DoramaRepo;

impl DoramaRepo {
    /// Insert a new dorama, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateDorama) -> Result<Dorama, DbError> {
        let query = format!(
            "INSERT INTO doramas (title, description, release_year, duration, main_actors, genre_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, Dorama>(&query)
                .bind(&input.title)
                .bind(&input.description)
                .bind(input.release_year)
                .bind(input.duration)
                .bind(&input.main_actors)
                .bind(input.genre_id)
                .fetch_one(pool),
        )
        .await
    }

    /// Fetch a dorama by id, or [`DbError::NotFound`].
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Dorama, DbError> {
        let query = format!("SELECT {COLUMNS} FROM doramas WHERE id = $1");
        with_timeout(sqlx::query_as::<_, Dorama>(&query).bind(id).fetch_optional(pool))
            .await?
            .ok_or(DbError::NotFound)
    }

    /// Replace every mutable field of an existing dorama.
    ///
    /// The write is guarded by the row's `version`: if the row was modified
    /// or deleted since `dorama` was read, no row matches and the call fails
    /// with [`DbError::EditConflict`].
    pub async fn update(pool: &PgPool, dorama: &Dorama) -> Result<Dorama, DbError> {
        let query = format!(
            "UPDATE doramas
             SET title = $1, description = $2, release_year = $3, duration = $4,
                 main_actors = $5, genre_id = $6, version = version + 1
             WHERE id = $7 AND version = $8
             RETURNING {COLUMNS}"
        );
        with_timeout(
            sqlx::query_as::<_, Dorama>(&query)
                .bind(&dorama.title)
                .bind(&dorama.description)
                .bind(dorama.release_year)
                .bind(dorama.duration)
                .bind(&dorama.main_actors)
                .bind(dorama.genre_id)
                .bind(dorama.id)
                .bind(dorama.version)
                .fetch_optional(pool),
        )
        .await?
        .ok_or(DbError::EditConflict)
    }

    /// Delete a dorama by id, or [`DbError::NotFound`] if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        let result =
            with_timeout(sqlx::query("DELETE FROM doramas WHERE id = $1").bind(id).execute(pool))
                .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    /// List doramas matching an optional full-text `title` search and an
    /// optional exact `release_year` filter, ordered and paginated per
    /// `filters`.
    ///
    /// `filters` must already be validated: its safelisted sort column is
    /// interpolated into the ORDER BY fragment. The window-function total
    /// feeds the returned [`Metadata`].
    pub async fn list(
        pool: &PgPool,
        title: &str,
        release_year: Option<i32>,
        filters: &Filters,
    ) -> Result<(Vec<Dorama>, Metadata), DbError> {
        let query = format!(
            "SELECT count(*) OVER() AS total_records, {COLUMNS}
             FROM doramas
             WHERE (to_tsvector('simple', title) @@ plainto_tsquery('simple', $1) OR $1 = '')
               AND ($2::integer IS NULL OR release_year = $2)
             ORDER BY {} {}, id ASC
             LIMIT $3 OFFSET $4",
            filters.sort_column(),
            filters.sort_direction()
        );
        let rows: Vec<PgRow> = with_timeout(
            sqlx::query(&query)
                .bind(title)
                .bind(release_year)
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(pool),
        )
        .await?;

        collect_page(rows, filters)
    }
}

/// Split `count(*) OVER()` rows into entities plus pagination metadata.
pub(crate) fn collect_page<T>(rows: Vec<PgRow>, filters: &Filters) -> Result<(Vec<T>, Metadata), DbError>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    let total_records = match rows.first() {
        Some(row) => row.try_get::<i64, _>("total_records").map_err(DbError::from)?,
        None => 0,
    };

    let entities = rows
        .iter()
        .map(T::from_row)
        .collect::<Result<Vec<_>, sqlx::Error>>()?;

    let metadata = Metadata::calculate(total_records, filters.page, filters.page_size);
    Ok((entities, metadata))
}
