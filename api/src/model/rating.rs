use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AudiobookId, RatingId, UserId},
    rating::{
        event::{CreateRating, UpdateRating},
        Rating,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRatingRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub audiobook_id: AudiobookId,
    // 5 段階評価
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
}

impl From<CreateRatingRequest> for CreateRating {
    fn from(value: CreateRatingRequest) -> Self {
        let CreateRatingRequest {
            user_id,
            audiobook_id,
            rating,
        } = value;
        Self {
            user_id,
            audiobook_id,
            rating,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRatingRequest {
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(skip)]
    pub audiobook_id: Option<AudiobookId>,
    #[garde(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

#[derive(new)]
pub struct UpdateRatingRequestWithId(RatingId, UpdateRatingRequest);

impl From<UpdateRatingRequestWithId> for UpdateRating {
    fn from(value: UpdateRatingRequestWithId) -> Self {
        let UpdateRatingRequestWithId(rating_id, req) = value;
        Self {
            rating_id,
            user_id: req.user_id,
            audiobook_id: req.audiobook_id,
            rating: req.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub rating_id: RatingId,
    pub user_id: UserId,
    pub audiobook_id: AudiobookId,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(value: Rating) -> Self {
        let Rating {
            id,
            user_id,
            audiobook_id,
            rating,
            created_at,
        } = value;
        Self {
            rating_id: id,
            user_id,
            audiobook_id,
            rating,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_rating_fails_validation() {
        let req: CreateRatingRequest =
            serde_json::from_str(r#"{"user_id": 1, "audiobook_id": 1, "rating": 6}"#).unwrap();
        assert!(req.validate(&()).is_err());

        let req: CreateRatingRequest =
            serde_json::from_str(r#"{"user_id": 1, "audiobook_id": 1, "rating": 5}"#).unwrap();
        assert!(req.validate(&()).is_ok());
    }
}
