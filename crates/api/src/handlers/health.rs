//! Liveness handler.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /app/check
///
/// Reports the server version and whether the database answers a trivial
/// query. Always 200; an unreachable database shows up in the body.
pub async fn check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let database = match dorama_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "database health check failed");
            "unreachable"
        }
    };

    Ok(Json(json!({
        "status": "available",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    })))
}
