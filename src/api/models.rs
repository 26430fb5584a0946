use crate::ratings::RatingsClient;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// `ratings` is `None` when ratings enrichment is disabled; the flag is
/// resolved once at startup, not per request.
#[derive(Clone)]
pub struct AppState {
    pub ratings: Option<Arc<dyn RatingsClient>>,
    pub star_color: String,
}

/// A single product review.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Review {
    pub reviewer: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Star rating attached to a review, or the error placeholder when the
/// ratings service could not be reached. Exactly one shape at a time.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Rating {
    Stars { stars: i32, color: String },
    Unavailable { error: String },
}

/// Response from the reviews endpoint.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub id: u64,
    pub reviews: Vec<Review>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn review_without_rating_omits_the_key() {
        let review = Review {
            reviewer: "Reviewer1".to_string(),
            text: "Great".to_string(),
            rating: None,
        };

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value, json!({"reviewer": "Reviewer1", "text": "Great"}));
    }

    #[test]
    fn stars_rating_serializes_flat() {
        let rating = Rating::Stars {
            stars: 5,
            color: "red".to_string(),
        };

        let value = serde_json::to_value(&rating).unwrap();
        assert_eq!(value, json!({"stars": 5, "color": "red"}));
    }

    #[test]
    fn unavailable_rating_serializes_flat() {
        let rating = Rating::Unavailable {
            error: "Ratings service is currently unavailable".to_string(),
        };

        let value = serde_json::to_value(&rating).unwrap();
        assert_eq!(
            value,
            json!({"error": "Ratings service is currently unavailable"})
        );
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
