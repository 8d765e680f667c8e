//! Handlers for the `/doramas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use dorama_core::types::DbId;
use dorama_db::models::dorama::CreateDorama;
use dorama_db::repositories::DoramaRepo;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{Json, Query};
use crate::handlers::build_filters;
use crate::middleware::permission::{RequireMoviesRead, RequireMoviesWrite};
use crate::state::AppState;

/// Sort keys accepted by the dorama list endpoint.
const SORT_SAFELIST: &[&str] = &[
    "id",
    "title",
    "release_year",
    "duration",
    "-id",
    "-title",
    "-release_year",
    "-duration",
];

/// Query parameters for `GET /app/doramas`.
#[derive(Debug, Deserialize)]
pub struct ListDoramasParams {
    #[serde(default)]
    pub title: String,
    pub release_year: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
}

/// GET /app/doramas
pub async fn list(
    _perm: RequireMoviesRead,
    State(state): State<AppState>,
    Query(params): Query<ListDoramasParams>,
) -> AppResult<Json<serde_json::Value>> {
    let filters = build_filters(params.page, params.page_size, params.sort, "id", SORT_SAFELIST)?;

    let (doramas, metadata) =
        DoramaRepo::list(&state.pool, &params.title, params.release_year, &filters).await?;

    Ok(Json(json!({ "doramas": doramas, "metadata": metadata })))
}

/// POST /app/doramas
pub async fn create(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Json(input): Json<CreateDorama>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    input.validate()?;
    let dorama = DoramaRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "dorama": dorama }))))
}

/// GET /app/doramas/{id}
pub async fn get(
    _perm: RequireMoviesRead,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let dorama = DoramaRepo::get(&state.pool, id).await?;
    Ok(Json(json!({ "dorama": dorama })))
}

/// PUT /app/doramas/{id}
///
/// Full-field replace against the current row version; a concurrent write
/// between the read and the update surfaces as 409.
pub async fn update(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateDorama>,
) -> AppResult<Json<serde_json::Value>> {
    input.validate()?;

    let mut dorama = DoramaRepo::get(&state.pool, id).await?;
    dorama.title = input.title;
    dorama.description = input.description;
    dorama.release_year = input.release_year;
    dorama.duration = input.duration;
    dorama.main_actors = input.main_actors;
    dorama.genre_id = input.genre_id;

    let dorama = DoramaRepo::update(&state.pool, &dorama).await?;
    Ok(Json(json!({ "dorama": dorama })))
}

/// DELETE /app/doramas/{id}
pub async fn delete(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    DoramaRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "dorama successfully deleted" })))
}
