use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::types::db::category;
use crate::types::db::product::{self, ActiveModel, Entity as Product};
use crate::types::internal::ProductDraft;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// A product joined with the name of its category
///
/// `category_name` is null when the product has no category or points at
/// one that no longer exists.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ProductListing {
    pub id: i32,
    pub image: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

/// ProductStore manages the product catalog
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All products with their category name, by id
    pub async fn list(&self) -> Result<Vec<ProductListing>, InternalError> {
        Product::find()
            .column_as(category::Column::Name, "category_name")
            .left_join(category::Entity)
            .order_by_asc(product::Column::Id)
            .into_model::<ProductListing>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_products", e))
    }

    /// One product by id
    ///
    /// # Errors
    /// * `CatalogError::ProductNotFound` - no row has that id
    pub async fn get(&self, id: i32) -> Result<product::Model, InternalError> {
        Product::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_product", e))?
            .ok_or_else(|| CatalogError::ProductNotFound(id).into())
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<product::Model, InternalError> {
        let new_product = ActiveModel {
            image: Set(draft.image),
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
            category_id: Set(draft.category_id),
            ..Default::default()
        };

        new_product
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_product", e))
    }

    /// Overwrite every field of a product
    ///
    /// # Errors
    /// * `CatalogError::ProductNotFound` - no row has that id
    pub async fn update(&self, id: i32, draft: ProductDraft) -> Result<(), InternalError> {
        let changes = ActiveModel {
            image: Set(draft.image),
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
            category_id: Set(draft.category_id),
            ..Default::default()
        };

        let result = Product::update_many()
            .set(changes)
            .filter(product::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_product", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::ProductNotFound(id).into());
        }

        Ok(())
    }

    /// Delete a product
    ///
    /// Existing orders keep their snapshot and list with a null product name.
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Product::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_product", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::ProductNotFound(id).into());
        }

        Ok(())
    }
}
