use dorama_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string. Never serialized; the plaintext is never stored.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub activated: bool,
    pub version: i32,
    pub created_at: Timestamp,
}

pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
