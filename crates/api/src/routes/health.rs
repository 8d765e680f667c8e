//! Route definition for the liveness endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Routes mounted directly under `/app`.
///
/// ```text
/// GET /check -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/check", get(health::check))
}
