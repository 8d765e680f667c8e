//! Opaque bearer token generation and hashing.
//!
//! A token has two representations: the plaintext handed to the client
//! exactly once, and the SHA-256 hex digest stored in the database. Lookups
//! hash the presented plaintext and compare digests, so a database leak never
//! exposes a usable credential.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use dorama_core::types::DbId;
use dorama_db::models::token::Token;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes backing a token plaintext. Encodes to 32
/// URL-safe base64 characters.
const TOKEN_BYTES: usize = 24;

/// Plaintext length in characters, used by request validation.
pub const TOKEN_PLAINTEXT_LEN: usize = 32;

/// Generate a fresh token for `user_id` with the given lifetime and scope.
///
/// Returns the storable row and the plaintext. The plaintext is never
/// persisted; callers must hand it to the client in the current response or
/// lose it.
pub fn generate_token(user_id: DbId, ttl: Duration, scope: &str) -> (Token, String) {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    let plaintext = URL_SAFE_NO_PAD.encode(bytes);

    let token = Token {
        hash: hash_token(&plaintext),
        user_id,
        expiry: Utc::now() + ttl,
        scope: scope.to_string(),
    };
    (token, plaintext)
}

/// SHA-256 hex digest of a token plaintext, matching the stored `hash` column.
pub fn hash_token(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    format!("{:x}", hasher.finalize())
}
