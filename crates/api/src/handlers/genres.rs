//! Handlers for the `/genres` resource.
//!
//! Genres are ordinary database rows with the same optimistic-concurrency
//! treatment as the other catalog entities.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use dorama_core::types::DbId;
use dorama_db::models::genre::CreateGenre;
use dorama_db::repositories::GenreRepo;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{Json, Query};
use crate::handlers::build_filters;
use crate::middleware::permission::{RequireMoviesRead, RequireMoviesWrite};
use crate::state::AppState;

/// Sort keys accepted by the genre list endpoint.
const SORT_SAFELIST: &[&str] = &["id", "name", "-id", "-name"];

/// Query parameters for `GET /app/genres`.
#[derive(Debug, Deserialize)]
pub struct ListGenresParams {
    #[serde(default)]
    pub name: String,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
}

/// GET /app/genres
pub async fn list(
    _perm: RequireMoviesRead,
    State(state): State<AppState>,
    Query(params): Query<ListGenresParams>,
) -> AppResult<Json<serde_json::Value>> {
    let filters = build_filters(params.page, params.page_size, params.sort, "id", SORT_SAFELIST)?;

    let (genres, metadata) = GenreRepo::list(&state.pool, &params.name, &filters).await?;

    Ok(Json(json!({ "genres": genres, "metadata": metadata })))
}

/// POST /app/genres
pub async fn create(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    input.validate()?;
    let genre = GenreRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "genre": genre }))))
}

/// GET /app/genres/{id}
pub async fn get(
    _perm: RequireMoviesRead,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let genre = GenreRepo::get(&state.pool, id).await?;
    Ok(Json(json!({ "genre": genre })))
}

/// PUT /app/genres/{id}
pub async fn update(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateGenre>,
) -> AppResult<Json<serde_json::Value>> {
    input.validate()?;

    let mut genre = GenreRepo::get(&state.pool, id).await?;
    genre.name = input.name;

    let genre = GenreRepo::update(&state.pool, &genre).await?;
    Ok(Json(json!({ "genre": genre })))
}

/// DELETE /app/genres/{id}
pub async fn delete(
    _perm: RequireMoviesWrite,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    GenreRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "genre successfully deleted" })))
}
