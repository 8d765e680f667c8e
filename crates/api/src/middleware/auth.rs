//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use dorama_core::error::CoreError;
use dorama_db::models::token::SCOPE_AUTHENTICATION;
use dorama_db::models::user::User;
use dorama_db::repositories::UserRepo;

use crate::auth::token::hash_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from an opaque Bearer token in the
/// `Authorization` header.
///
/// The presented plaintext is hashed and looked up with authentication scope;
/// an unknown hash and an expired token are rejected identically. Use this as
/// an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The full user row the token resolves to.
    pub user: User,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "you must be authenticated to access this resource".into(),
                ))
            })?;

        let plaintext = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "invalid Authorization format, expected: Bearer <token>".into(),
            ))
        })?;

        let user = UserRepo::get_for_token(
            &state.pool,
            SCOPE_AUTHENTICATION,
            &hash_token(plaintext),
        )
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "invalid or expired authentication token".into(),
            ))
        })?;

        Ok(AuthUser { user })
    }
}
