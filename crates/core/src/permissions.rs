//! Well-known permission code constants.
//!
//! These must match the seed data in
//! `20260810000006_create_permissions_tables.sql`.

pub const PERM_MOVIES_READ: &str = "movies:read";
pub const PERM_MOVIES_WRITE: &str = "movies:write";
