use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /api/health`: liveness, no dependencies touched.
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
