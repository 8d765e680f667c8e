//! Authentication primitives: password hashing and opaque token issuance.

pub mod password;
pub mod token;
