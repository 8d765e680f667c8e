//! Typed failures for the repository layer.

use std::future::Future;
use std::time::Duration;

/// Ceiling for a single store operation. On elapse the in-flight query is
/// abandoned and the call fails with [`DbError::Timeout`], no retry.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("record not found")]
    NotFound,

    /// The target row changed or vanished since it was last read.
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    #[error("a user with this email address already exists")]
    DuplicateEmail,

    #[error("the database operation timed out")]
    Timeout,

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            // PostgreSQL unique violation (23505) on the users email
            // constraint. Other unique violations stay unclassified.
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some("23505")
                    && db_err.constraint() == Some("uq_users_email") =>
            {
                DbError::DuplicateEmail
            }
            _ => DbError::Sqlx(err),
        }
    }
}

/// Run a store operation under [`QUERY_TIMEOUT`].
pub(crate) async fn with_timeout<T, F>(fut: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result.map_err(DbError::from),
        Err(_) => Err(DbError::Timeout),
    }
}
