//! Route definitions for the dorama catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::doramas;
use crate::state::AppState;

/// Routes mounted at `/doramas`.
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
        .route("/", get(doramas::list).post(doramas::create))
        .route(
            "/{id}",
            get(doramas::get).put(doramas::update).delete(doramas::delete),
        )
}
