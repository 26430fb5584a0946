use super::{ProductRatings, RatingsClient, RatingsError, ReviewerRating};
use async_trait::async_trait;
use tracing::debug;

pub mod proto {
    tonic::include_proto!("ratings");
}

use proto::ratings_service_client::RatingsServiceClient;

/// gRPC-backed ratings client.
///
/// Dials the configured endpoint on every call and speaks plaintext HTTP/2;
/// no timeout is set here, the transport defaults apply.
#[derive(Clone)]
pub struct GrpcRatingsClient {
    endpoint: String,
}

impl GrpcRatingsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RatingsClient for GrpcRatingsClient {
    async fn get_ratings(&self, product_id: u64) -> Result<ProductRatings, RatingsError> {
        debug!(product_id, endpoint = %self.endpoint, "Fetching ratings");

        let mut client = RatingsServiceClient::connect(self.endpoint.clone()).await?;
        let response = client
            .get(proto::Product {
                product_id: product_id as i64,
            })
            .await?;

        Ok(response.into_inner().into())
    }
}

impl From<proto::Rating> for ProductRatings {
    fn from(rating: proto::Rating) -> Self {
        Self {
            reviewers: rating
                .reviewers
                .into_iter()
                .map(|reviewer| ReviewerRating {
                    rate: reviewer.rate,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proto_rating_converts_to_domain() {
        let rating = proto::Rating {
            reviewers: vec![proto::Reviewer { rate: 5 }, proto::Reviewer { rate: 4 }],
        };

        let ratings: ProductRatings = rating.into();
        assert_eq!(
            ratings.reviewers,
            vec![ReviewerRating { rate: 5 }, ReviewerRating { rate: 4 }]
        );
    }

    #[test]
    fn empty_proto_rating_converts_to_empty_domain() {
        let ratings: ProductRatings = proto::Rating { reviewers: vec![] }.into();
        assert!(ratings.reviewers.is_empty());
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_as_connect_error() {
        let client = GrpcRatingsClient::new("http://127.0.0.1:1");

        let err = client.get_ratings(0).await.unwrap_err();
        assert!(matches!(err, RatingsError::Connect(_)));
    }
}
