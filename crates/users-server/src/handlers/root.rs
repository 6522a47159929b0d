use axum::Json;
use users_shared::api::{GreetingResponse, HealthResponse};

/// GET /
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Hello API".to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
