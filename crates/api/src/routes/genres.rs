//! Route definitions for genres.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Routes mounted at `/genres`.
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
        .route("/", get(genres::list).post(genres::create))
        .route(
            "/{id}",
            get(genres::get).put(genres::update).delete(genres::delete),
        )
}
