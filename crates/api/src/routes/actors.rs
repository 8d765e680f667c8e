//! Route definitions for actors.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /        -> list    (movies:read)
/// POST   /        -> create  (movies:write)
/// GET    /{id}    -> get     (movies:read)
/// PUT    /{id}    -> update  (movies:write)
/// DELETE /{id}    -> delete  (movies:write)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::list).post(actors::create))
        .route(
            "/{id}",
            get(actors::get).put(actors::update).delete(actors::delete),
        )
}
