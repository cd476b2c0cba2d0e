use poem_openapi::Object;

use crate::types::db::category;

/// Body for creating or renaming a category
#[derive(Object, Debug)]
pub struct CategoryRequest {
    /// Category name, must not be empty
    pub name: Option<String>,
}

/// A category as returned by the API
#[derive(Object, Debug, PartialEq)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
