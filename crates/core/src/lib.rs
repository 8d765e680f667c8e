//! Domain layer for the dorama catalog service.
//!
//! Zero internal dependencies so the db and api crates (and any future CLI
//! tooling) can share types, errors, and the pagination logic.

pub mod error;
pub mod pagination;
pub mod permissions;
pub mod types;
