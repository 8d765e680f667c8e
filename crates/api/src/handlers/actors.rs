//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use dorama_core::types::DbId;
use dorama_db::models::actor::CreateActor;
use dorama_db::repositories::ActorRepo;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{Json, Query};
use crate::handlers::build_filters;
use crate::middleware::permission::{RequireMoviesRead, RequireMoviesWrite};
use crate::state::AppState;

/// Sort keys accepted by the actor list endpoint.
const SORT_SAFELIST: &[&str] = &[
    "id",
    "full_name",
    "dorama_id",
    "-id",
    "-full_name",
    "-dorama_id",
];

/// Query parameters for `GET /app/actors`.
#[derive(Debug, Deserialize)]
pub struct ListActorsParams {
    #[serde(default)]
    pub full_name: String,
    pub dorama_id: Option<DbId>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
}

/// GET /app/actors
pub async fn list(
    _perm: RequireMoviesRead,
    State(state): State<AppState>,
    Query(params): Query<ListActorsParams>,
) -> AppResult<Json<serde_json::Value>> {
    let filters = build_filters(params.page, params.page_size, params.sort, "id", SORT_SAFELIST)?;

    let (actors, metadata) =
        ActorRepo::list(&state.pool, &params.full_name, params.dorama_id, &filters).await?;

    Ok(Json(json!({ "actors": actors, "metadata": metadata })))
}

/// POST /app/actors
pub async fn create(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    input.validate()?;
    let actor = ActorRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "actor": actor }))))
}

/// GET /app/actors/{id}
pub async fn get(
    _perm: RequireMoviesRead,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let actor = ActorRepo::get(&state.pool, id).await?;
    Ok(Json(json!({ "actor": actor })))
}

/// PUT /app/actors/{id}
///
/// Full-field replace against the current row version; a concurrent write
/// between the read and the update surfaces as 409.
pub async fn update(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateActor>,
) -> AppResult<Json<serde_json::Value>> {
    input.validate()?;

    let mut actor = ActorRepo::get(&state.pool, id).await?;
    actor.full_name = input.full_name;
    actor.dorama_id = input.dorama_id;

    let actor = ActorRepo::update(&state.pool, &actor).await?;
    Ok(Json(json!({ "actor": actor })))
}

/// DELETE /app/actors/{id}
pub async fn delete(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    ActorRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "actor successfully deleted" })))
}
