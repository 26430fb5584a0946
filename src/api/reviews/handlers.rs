use crate::api::models::{AppError, AppState, Rating, Review, ReviewsResponse};
use crate::ratings::ProductRatings;
use crate::repository;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, warn};

const INVALID_PRODUCT_ID: &str = "please provide numeric product ID";
const RATINGS_UNAVAILABLE: &str = "Ratings service is currently unavailable";

/// Return the reviews for a product, enriched with star ratings when the
/// ratings client is wired up.
pub async fn get_reviews_handler(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ReviewsResponse>, AppError> {
    let product_id = parse_product_id(&product_id).map_err(AppError::BadRequest)?;

    info!(product_id, "Fetching reviews");

    let mut reviews = repository::local_reviews();

    if let Some(client) = &state.ratings {
        match client.get_ratings(product_id).await {
            Ok(ratings) if ratings.reviewers.len() >= reviews.len() => {
                attach_stars(&mut reviews, &ratings, &state.star_color);
            }
            Ok(ratings) => {
                warn!(
                    product_id,
                    reviewers = ratings.reviewers.len(),
                    "Ratings response is missing reviewer entries, degrading"
                );
                attach_unavailable(&mut reviews);
            }
            Err(err) => {
                warn!(product_id, error = %err, "Ratings lookup failed, degrading");
                attach_unavailable(&mut reviews);
            }
        }
    }

    Ok(Json(ReviewsResponse {
        id: product_id,
        reviews,
    }))
}

/// `GET /reviews/` leaves the trailing segment empty; that fails the numeric
/// parse like any other invalid id.
pub async fn missing_product_id_handler() -> AppError {
    AppError::BadRequest(INVALID_PRODUCT_ID.to_string())
}

/// Parse the trailing path segment into a product id.
fn parse_product_id(raw: &str) -> Result<u64, String> {
    raw.parse().map_err(|_| INVALID_PRODUCT_ID.to_string())
}

fn attach_stars(reviews: &mut [Review], ratings: &ProductRatings, color: &str) {
    for (review, reviewer) in reviews.iter_mut().zip(&ratings.reviewers) {
        review.rating = Some(Rating::Stars {
            stars: reviewer.rate,
            color: color.to_string(),
        });
    }
}

fn attach_unavailable(reviews: &mut [Review]) {
    for review in reviews {
        review.rating = Some(Rating::Unavailable {
            error: RATINGS_UNAVAILABLE.to_string(),
        });
    }
}
