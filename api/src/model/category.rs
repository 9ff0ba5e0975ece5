use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    category::{
        event::{CreateCategory, UpdateCategory},
        Category,
    },
    id::CategoryId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(value: CreateCategoryRequest) -> Self {
        let CreateCategoryRequest { name } = value;
        Self { name }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: Option<String>,
}

#[derive(new)]
pub struct UpdateCategoryRequestWithId(CategoryId, UpdateCategoryRequest);

impl From<UpdateCategoryRequestWithId> for UpdateCategory {
    fn from(value: UpdateCategoryRequestWithId) -> Self {
        let UpdateCategoryRequestWithId(category_id, req) = value;
        Self {
            category_id,
            name: req.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category_id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        let Category {
            id,
            name,
            created_at,
        } = value;
        Self {
            category_id: id,
            name,
            created_at,
        }
    }
}
