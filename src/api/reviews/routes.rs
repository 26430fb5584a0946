use crate::api::models::AppState;
use crate::api::reviews::handlers::{get_reviews_handler, missing_product_id_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reviews/{id}", get(get_reviews_handler))
        // The bare prefix has an empty trailing segment, which is still a
        // parse failure rather than an unknown route.
        .route("/reviews/", get(missing_product_id_handler))
}
