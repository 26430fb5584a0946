pub mod models;
pub mod reviews;

// Re-exports
pub use models::*;

use axum::Json;

// Health handler (simple, keep here)
pub async fn health_handler() -> Json<models::HealthResponse> {
    Json(models::HealthResponse {
        status: "Reviews is healthy".to_string(),
    })
}
