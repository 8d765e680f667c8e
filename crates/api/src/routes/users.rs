//! Route definitions for registration and activation.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`. Both are reachable without authentication.
///
/// ```text
/// POST /           -> register
/// PUT  /activated  -> activate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register))
        .route("/activated", put(users::activate))
}
