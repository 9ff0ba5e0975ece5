use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AudiobookId, ReviewId, UserId},
    review::{
        event::{CreateReview, UpdateReview},
        Review,
    },
};
use serde::{Deserialize, Serialize};

use super::double_option;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub audiobook_id: AudiobookId,
    #[garde(skip)]
    pub review_text: Option<String>,
}

impl From<CreateReviewRequest> for CreateReview {
    fn from(value: CreateReviewRequest) -> Self {
        let CreateReviewRequest {
            user_id,
            audiobook_id,
            review_text,
        } = value;
        Self {
            user_id,
            audiobook_id,
            review_text,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(skip)]
    pub audiobook_id: Option<AudiobookId>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub review_text: Option<Option<String>>,
}

#[derive(new)]
pub struct UpdateReviewRequestWithId(ReviewId, UpdateReviewRequest);

impl From<UpdateReviewRequestWithId> for UpdateReview {
    fn from(value: UpdateReviewRequestWithId) -> Self {
        let UpdateReviewRequestWithId(review_id, req) = value;
        Self {
            review_id,
            user_id: req.user_id,
            audiobook_id: req.audiobook_id,
            review_text: req.review_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub review_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            id,
            user_id,
            audiobook_id,
            review_text,
            created_at,
        } = value;
        Self {
            review_id: id,
            user_id,
            audiobook_id,
            review_text,
            created_at,
        }
    }
}
