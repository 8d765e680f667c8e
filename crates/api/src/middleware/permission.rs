//! Permission-check extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose account is
//! not activated or lacks the required permission code. Use these in route
//! handlers to enforce authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use dorama_core::error::CoreError;
use dorama_core::permissions::{PERM_MOVIES_READ, PERM_MOVIES_WRITE};
use dorama_db::repositories::PermissionRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an activated account holding `movies:read`. Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn read_only(RequireMoviesRead(auth): RequireMoviesRead) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireMoviesRead(pub AuthUser);

impl FromRequestParts<AppState> for RequireMoviesRead {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = require_permission(parts, state, PERM_MOVIES_READ).await?;
        Ok(RequireMoviesRead(auth))
    }
}

/// Requires an activated account holding `movies:write`. Rejects with 403
/// Forbidden otherwise.
pub struct RequireMoviesWrite(pub AuthUser);

impl FromRequestParts<AppState> for RequireMoviesWrite {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = require_permission(parts, state, PERM_MOVIES_WRITE).await?;
        Ok(RequireMoviesWrite(auth))
    }
}

/// Authenticate, then check activation and the permission code in order.
/// The first failed step wins; the handler never runs on failure.
async fn require_permission(
    parts: &mut Parts,
    state: &AppState,
    code: &str,
) -> Result<AuthUser, AppError> {
    let auth = AuthUser::from_request_parts(parts, state).await?;

    if !auth.user.activated {
        return Err(AppError::Core(CoreError::Forbidden(
            "your user account must be activated to access this resource".into(),
        )));
    }

    let permissions = PermissionRepo::get_all_for_user(&state.pool, auth.user.id).await?;
    if !permissions.includes(code) {
        return Err(AppError::Core(CoreError::Forbidden(
            "your user account doesn't have the necessary permissions to access this resource"
                .into(),
        )));
    }

    Ok(auth)
}
