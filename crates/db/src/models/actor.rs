use dorama_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Actor {
    pub id: DbId,
    pub full_name: String,
    /// Optional link to the dorama the actor is best known for.
    pub dorama_id: Option<DbId>,
    pub version: i32,
    pub created_at: Timestamp,
}

/// Full field set for both insert and replace-on-update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateActor {
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub full_name: String,
    #[serde(default)]
    pub dorama_id: Option<DbId>,
}
