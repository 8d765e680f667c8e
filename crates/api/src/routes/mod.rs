//! Route modules, one per resource, assembled under `/app`.

use axum::Router;

use crate::state::AppState;

pub mod actors;
pub mod doramas;
pub mod genres;
pub mod health;
pub mod tokens;
pub mod users;

/// All application routes, to be nested under `/app`.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/doramas", doramas::router())
        .nest("/actors", actors::router())
        .nest("/genres", genres::router())
        .nest("/users", users::router())
        .nest("/tokens", tokens::router())
}
