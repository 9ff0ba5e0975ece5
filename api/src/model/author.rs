use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    author::{
        event::{CreateAuthor, UpdateAuthor},
        Author,
    },
    id::AuthorId,
};
use serde::{Deserialize, Serialize};

use super::double_option;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAuthorRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(skip)]
    pub bio: Option<String>,
}

impl From<CreateAuthorRequest> for CreateAuthor {
    fn from(value: CreateAuthorRequest) -> Self {
        let CreateAuthorRequest { name, bio } = value;
        Self { name, bio }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAuthorRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
}

#[derive(new)]
pub struct UpdateAuthorRequestWithId(AuthorId, UpdateAuthorRequest);

impl From<UpdateAuthorRequestWithId> for UpdateAuthor {
    fn from(value: UpdateAuthorRequestWithId) -> Self {
        let UpdateAuthorRequestWithId(author_id, req) = value;
        Self {
            author_id,
            name: req.name,
            bio: req.bio,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub author_id: AuthorId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Author> for AuthorResponse {
    fn from(value: Author) -> Self {
        let Author {
            id,
            name,
            bio,
            created_at,
        } = value;
        Self {
            author_id: id,
            name,
            bio,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 省略された bio と null 指定の bio は別物として復元される
    #[test]
    fn omitted_field_differs_from_explicit_null() {
        let omitted: UpdateAuthorRequest = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert_eq!(omitted.bio, None);

        let nulled: UpdateAuthorRequest = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(nulled.bio, Some(None));

        let given: UpdateAuthorRequest = serde_json::from_str(r#"{"bio": "A bio"}"#).unwrap();
        assert_eq!(given.bio, Some(Some("A bio".into())));
    }
}
