use dorama_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Dorama {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    /// Episode running time in minutes.
    pub duration: i32,
    /// Free-text headline cast list.
    pub main_actors: String,
    pub genre_id: DbId,
    pub version: i32,
    pub created_at: Timestamp,
}

/// Full field set for both insert and replace-on-update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDorama {
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must be provided"))]
    pub description: String,
    #[validate(range(min = 1888, max = 2100, message = "must be between 1888 and 2100"))]
    pub release_year: i32,
    #[validate(range(min = 1, message = "must be a positive number of minutes"))]
    pub duration: i32,
    #[validate(length(min = 1, message = "must be provided"))]
    pub main_actors: String,
    #[validate(range(min = 1, message = "must be a valid genre id"))]
    pub genre_id: DbId,
}
