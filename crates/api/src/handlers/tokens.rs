//! Handler for authentication token issuance.

use axum::extract::State;
use axum::http::StatusCode;
use chrono::Duration;
use dorama_core::error::CoreError;
use dorama_db::models::token::SCOPE_AUTHENTICATION;
use dorama_db::repositories::{TokenRepo, UserRepo};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::auth::password::verify_password;
use crate::auth::token::generate_token;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Request body for `POST /app/tokens/login`.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginUser {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 72, message = "must be between 8 and 72 characters"))]
    pub password: String,
}

/// POST /app/tokens/login
///
/// Exchanges credentials for a fresh 24-hour authentication token. A wrong
/// email and a wrong password are rejected identically.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginUser>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // 1. Validate the request body.
    input.validate()?;

    // 2. Look up the account and verify the password.
    let user = UserRepo::get_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let matches = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("password verify: {e}"))))?;
    if !matches {
        return Err(invalid_credentials());
    }

    // 3. Issue the authentication token; the plaintext leaves the process
    //    exactly once, in this response.
    let ttl = Duration::hours(state.config.auth_token_ttl_hours);
    let (token, plaintext) = generate_token(user.id, ttl, SCOPE_AUTHENTICATION);
    TokenRepo::insert(&state.pool, &token).await?;

    tracing::info!(user_id = user.id, "issued authentication token");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "authentication_token": { "token": plaintext, "expiry": token.expiry }
        })),
    ))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "invalid authentication credentials".into(),
    ))
}
