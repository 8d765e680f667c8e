//! Route definition for token issuance.

use axum::routing::post;
use axum::Router;

use crate::handlers::tokens;
use crate::state::AppState;

/// Routes mounted at `/tokens`. Reachable without authentication.
///
/// ```text
/// POST /login -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(tokens::login))
}
