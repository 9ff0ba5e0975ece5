use super::Category;
use crate::model::id::CategoryId;

#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
}

#[derive(Debug)]
pub struct UpdateCategory {
    pub category_id: CategoryId,
    pub name: Option<String>,
}

impl UpdateCategory {
    pub fn apply(self, current: Category) -> Category {
        Category {
            name: self.name.unwrap_or(current.name),
            ..current
        }
    }
}

#[derive(Debug)]
pub struct DeleteCategory {
    pub category_id: CategoryId,
}
