use crate::api::models::Review;

/// Supply the fixed reviews for a product.
///
/// Content is the same for every product id; entries are built fresh per
/// request and never shared.
pub fn local_reviews() -> Vec<Review> {
    vec![
        Review {
            reviewer: "Reviewer1".to_string(),
            text: "An extremely entertaining play by Shakespeare. The slapstick humour is refreshing!"
                .to_string(),
            rating: None,
        },
        Review {
            reviewer: "Reviewer2".to_string(),
            text: "Absolutely fun and entertaining. The play lacks thematic depth when compared to other plays by Shakespeare."
                .to_string(),
            rating: None,
        },
    ]
}
