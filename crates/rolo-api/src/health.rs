//! Handler for `GET /health`.

use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

/// `GET /health` — liveness probe, no store access.
pub async fn handler() -> Json<Value> {
  Json(json!({
    "status": "ok",
    "timestamp": Utc::now(),
  }))
}
