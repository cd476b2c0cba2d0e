use super::{AdminGuard, ApiTags};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::CategoryStore;
use crate::types::dto::category::{CategoryRequest, CategoryResponse};
use crate::types::dto::common::MessageResponse;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use std::sync::Arc;

/// Category endpoints
pub struct CategoriesApi {
    category_store: Arc<CategoryStore>,
}

impl CategoriesApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            category_store: app_data.category_store.clone(),
        }
    }
}

fn required_name(body: CategoryRequest) -> Result<String, ApiError> {
    body.name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("Category name is required"))
}

#[OpenApi]
impl CategoriesApi {
    /// List categories, ordered by name
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn list(&self) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
        let categories = self.category_store.list().await?;
        Ok(Json(categories.into_iter().map(Into::into).collect()))
    }

    /// Create a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create(
        &self,
        _admin: AdminGuard,
        body: Json<CategoryRequest>,
    ) -> Result<Json<CategoryResponse>, ApiError> {
        let name = required_name(body.0)?;
        let created = self.category_store.create(name).await?;
        Ok(Json(created.into()))
    }

    /// Rename a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update(
        &self,
        _admin: AdminGuard,
        id: Path<i32>,
        body: Json<CategoryRequest>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        let name = required_name(body.0)?;
        self.category_store.update(id.0, name).await?;
        Ok(Json(MessageResponse::new("Category updated")))
    }

    /// Delete a category
    ///
    /// Products in it keep their `category_id` and list without a category name.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete(
        &self,
        _admin: AdminGuard,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.category_store.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Category deleted")))
    }
}
