pub mod grpc;

pub use grpc::GrpcRatingsClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingsError {
    #[error("failed to reach ratings service: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("ratings call failed: {0}")]
    Rpc(#[from] tonic::Status),
}

/// Ratings reported for a product, one entry per reviewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRatings {
    pub reviewers: Vec<ReviewerRating>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewerRating {
    pub rate: i32,
}

/// Client for the external ratings service.
///
/// Object-safe so handlers can be exercised against a stub in tests.
#[async_trait]
pub trait RatingsClient: Send + Sync {
    async fn get_ratings(&self, product_id: u64) -> Result<ProductRatings, RatingsError>;
}
