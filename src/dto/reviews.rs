use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::ReviewWithAuthor;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewList {
    pub items: Vec<ReviewWithAuthor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i32) -> CreateReviewRequest {
        CreateReviewRequest {
            rating,
            comment: Some("Quiet and clean".into()),
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(review(0).validate().is_err());
        assert!(review(6).validate().is_err());
        assert!(review(1).validate().is_ok());
        assert!(review(5).validate().is_ok());
    }
}
