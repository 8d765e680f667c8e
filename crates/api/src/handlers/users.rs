//! Handlers for registration and account activation.

use axum::extract::State;
use axum::http::StatusCode;
use chrono::Duration;
use dorama_core::error::{CoreError, FieldErrors};
use dorama_core::permissions::PERM_MOVIES_READ;
use dorama_db::models::token::SCOPE_ACTIVATION;
use dorama_db::models::user::CreateUser;
use dorama_db::repositories::{PermissionRepo, TokenRepo, UserRepo};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::auth::token::{generate_token, hash_token, TOKEN_PLAINTEXT_LEN};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Request body for `POST /app/users`.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 72, message = "must be between 8 and 72 characters"))]
    pub password: String,
}

/// Request body for `PUT /app/users/activated`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivateUser {
    pub token: String,
}

/// POST /app/users
///
/// Registers a new, inactive account and hands back the activation token in
/// the response body (there is no mail delivery).
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // 1. Validate the request body.
    input.validate()?;

    // 2. Hash the password; the plaintext is dropped here.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("password hashing: {e}"))))?;

    // 3. Insert the user. A duplicate email surfaces as a validation error
    //    naming the field.
    let user = UserRepo::insert(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    // 4. Every new account can read the catalog once activated.
    PermissionRepo::add_for_user(&state.pool, user.id, &[PERM_MOVIES_READ]).await?;

    // 5. Issue the activation token.
    let ttl = Duration::hours(state.config.activation_token_ttl_hours);
    let (token, plaintext) = generate_token(user.id, ttl, SCOPE_ACTIVATION);
    TokenRepo::insert(&state.pool, &token).await?;

    tracing::info!(user_id = user.id, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "user": { "token": plaintext, "user": user } })),
    ))
}

/// PUT /app/users/activated
///
/// Flips the `activated` flag for the account owning a valid activation
/// token, then invalidates every activation token for that account so the
/// presented one cannot be replayed.
pub async fn activate(
    State(state): State<AppState>,
    Json(input): Json<ActivateUser>,
) -> AppResult<Json<serde_json::Value>> {
    // 1. Structural check before touching the store.
    let mut errors = FieldErrors::new();
    errors.check(!input.token.is_empty(), "token", "must be provided");
    errors.check(
        input.token.is_empty() || input.token.len() == TOKEN_PLAINTEXT_LEN,
        "token",
        "must be 32 characters long",
    );
    errors.into_result()?;

    // 2. Scope-qualified lookup; an unknown and an expired token are
    //    indistinguishable to the caller.
    let mut user = UserRepo::get_for_token(&state.pool, SCOPE_ACTIVATION, &hash_token(&input.token))
        .await?
        .ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.add("token", "invalid or expired activation token");
            AppError::from(errors)
        })?;

    // 3. Version-guarded flag flip.
    user.activated = true;
    let user = UserRepo::update(&state.pool, &user).await?;

    // 4. Burn all remaining activation tokens for this account.
    TokenRepo::delete_all_for_user(&state.pool, SCOPE_ACTIVATION, user.id).await?;

    tracing::info!(user_id = user.id, "activated user account");

    Ok(Json(json!({ "user": user })))
}
