use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness probe; reports the crate version.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
