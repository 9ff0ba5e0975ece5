use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{author::event::DeleteAuthor, id::AuthorId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    author::{
        AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest, UpdateAuthorRequestWithId,
    },
    list::ListQuery,
};

pub async fn register_author(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAuthorRequest>,
) -> AppResult<Json<AuthorResponse>> {
    req.validate(&())?;
    registry
        .author_repository()
        .create(req.into())
        .await
        .map(AuthorResponse::from)
        .map(Json)
}

pub async fn show_author(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<AuthorId>,
) -> AppResult<Json<AuthorResponse>> {
    registry
        .author_repository()
        .find_by_id(author_id)
        .await
        .and_then(|author| match author {
            Some(author) => Ok(Json(author.into())),
            None => Err(AppError::EntityNotFound("Author not found".into())),
        })
}

pub async fn show_author_list(
    State(registry): State<AppRegistry>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<AuthorResponse>>> {
    registry
        .author_repository()
        .find_all(query.into())
        .await
        .map(|authors| authors.into_iter().map(AuthorResponse::from).collect())
        .map(Json)
}

pub async fn update_author(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<AuthorId>,
    Json(req): Json<UpdateAuthorRequest>,
) -> AppResult<Json<AuthorResponse>> {
    req.validate(&())?;
    registry
        .author_repository()
        .update(UpdateAuthorRequestWithId::new(author_id, req).into())
        .await
        .map(AuthorResponse::from)
        .map(Json)
}

pub async fn delete_author(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<AuthorId>,
) -> AppResult<Json<AuthorResponse>> {
    registry
        .author_repository()
        .delete(DeleteAuthor { author_id })
        .await
        .map(AuthorResponse::from)
        .map(Json)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use kernel::{
        model::author::Author,
        repository::{
            audiobook::MockAudiobookRepository, author::MockAuthorRepository,
            bookmark::MockBookmarkRepository, category::MockCategoryRepository,
            chapter::MockChapterRepository, health::MockHealthCheckRepository,
            listening_history::MockListeningHistoryRepository, narrator::MockNarratorRepository,
            purchase::MockPurchaseRepository, rating::MockRatingRepository,
            review::MockReviewRepository, subscription::MockSubscriptionRepository,
            user::MockUserRepository,
        },
    };
    use tower::ServiceExt;

    use super::*;
    use crate::route::author::build_author_routers;

    fn registry_with(author_repository: MockAuthorRepository) -> AppRegistry {
        AppRegistry::new(
            Arc::new(MockHealthCheckRepository::new()),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockSubscriptionRepository::new()),
            Arc::new(author_repository),
            Arc::new(MockNarratorRepository::new()),
            Arc::new(MockAudiobookRepository::new()),
            Arc::new(MockChapterRepository::new()),
            Arc::new(MockCategoryRepository::new()),
            Arc::new(MockListeningHistoryRepository::new()),
            Arc::new(MockBookmarkRepository::new()),
            Arc::new(MockReviewRepository::new()),
            Arc::new(MockRatingRepository::new()),
            Arc::new(MockPurchaseRepository::new()),
        )
    }

    #[tokio::test]
    async fn show_author_returns_the_record() -> anyhow::Result<()> {
        let mut mock = MockAuthorRepository::new();
        mock.expect_find_by_id().returning(|author_id| {
            Ok(Some(Author {
                id: author_id,
                name: "Author One".into(),
                bio: None,
                created_at: Utc::now(),
            }))
        });

        let app = build_author_routers().with_state(registry_with(mock));
        let res = app
            .oneshot(Request::builder().uri("/authors/1").body(Body::empty())?)
            .await?;
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["author_id"], 1);
        assert_eq!(json["name"], "Author One");
        Ok(())
    }

    #[tokio::test]
    async fn missing_author_yields_404() -> anyhow::Result<()> {
        let mut mock = MockAuthorRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));

        let app = build_author_routers().with_state(registry_with(mock));
        let res = app
            .oneshot(Request::builder().uri("/authors/99999").body(Body::empty())?)
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_create_request_is_rejected_before_storage() -> anyhow::Result<()> {
        // リポジトリに expect を立てないことで、検証前に呼ばれたらテストが落ちる
        let app = build_author_routers().with_state(registry_with(MockAuthorRepository::new()));
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/authors/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": ""}"#))?,
            )
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }
}
