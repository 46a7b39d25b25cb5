use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::handlers::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Car Rating API is healthy"
    }))
}
