use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub const GREETING: &str = "Hello from the song language API!";

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        (StatusCode::OK, Json(GREETING))
    }

    pub async fn health_check() -> impl IntoResponse {
        (StatusCode::OK, Json(json!({"status": "ok"})))
    }
}
