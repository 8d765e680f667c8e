//! Extractor-based authentication and permission checks.
//!
//! A request moves through at most three states: unauthenticated,
//! authenticated, authorized. Each extractor performs one transition and
//! rejects the request before the handler runs if the transition fails.

pub mod auth;
pub mod permission;
