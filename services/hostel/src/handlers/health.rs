use axum::{Json, extract::State};
use serde_json::{Value, json};

use hostel_core::error::AppError;

use crate::state::AppState;

/// Handler for `GET /api/readyz`: ready once the database answers.
pub async fn readyz(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("database ping")))?;
    Ok(Json(json!({ "ok": true })))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
