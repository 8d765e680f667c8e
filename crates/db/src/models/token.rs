use dorama_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Scope tag for email-activation tokens.
pub const SCOPE_ACTIVATION: &str = "activation";

/// Scope tag for login (bearer) tokens.
pub const SCOPE_AUTHENTICATION: &str = "authentication";

/// Persisted token row. Only the SHA-256 hex hash of the plaintext is
/// stored; the plaintext is returned to the caller exactly once.
#[derive(Debug, Clone, FromRow)]
pub struct Token {
    pub hash: String,
    pub user_id: DbId,
    pub expiry: Timestamp,
    pub scope: String,
}
