use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::types::db::category::{self, ActiveModel, Entity as Category};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

/// CategoryStore manages the category taxonomy
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories, ordered by name
    pub async fn list(&self) -> Result<Vec<category::Model>, InternalError> {
        Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_categories", e))
    }

    /// Insert a category
    ///
    /// A duplicate name fails with the store's uniqueness error.
    pub async fn create(&self, name: String) -> Result<category::Model, InternalError> {
        let new_category = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        new_category
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_category", e))
    }

    /// Rename a category
    ///
    /// # Errors
    /// * `CatalogError::CategoryNotFound` - no row has that id
    pub async fn update(&self, id: i32, name: String) -> Result<(), InternalError> {
        let result = Category::update_many()
            .col_expr(category::Column::Name, Expr::value(name))
            .filter(category::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_category", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::CategoryNotFound(id).into());
        }

        Ok(())
    }

    /// Delete a category
    ///
    /// Products keep their `category_id`; reads show a null category name.
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Category::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_category", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::CategoryNotFound(id).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_db;

    async fn setup_store() -> CategoryStore {
        CategoryStore::new(setup_test_db().await)
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let store = setup_store().await;
        store.create("Shoes".to_string()).await.unwrap();
        store.create("Bags".to_string()).await.unwrap();
        store.create("Hats".to_string()).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Bags", "Hats", "Shoes"]);
    }

    #[tokio::test]
    async fn test_create_returns_row_with_id() {
        let store = setup_store().await;

        let created = store.create("Shoes".to_string()).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Shoes");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_database_error() {
        let store = setup_store().await;
        store.create("Shoes".to_string()).await.unwrap();

        let result = store.create("Shoes".to_string()).await;

        match result {
            Err(InternalError::Database { source, .. }) => {
                assert!(source.to_string().contains("UNIQUE"))
            }
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_renames() {
        let store = setup_store().await;
        let created = store.create("Shoes".to_string()).await.unwrap();

        store.update(created.id, "Sneakers".to_string()).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Sneakers");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = setup_store().await;
        store.create("Shoes".to_string()).await.unwrap();

        let result = store.update(99, "Boots".to_string()).await;

        assert!(matches!(
            result,
            Err(InternalError::Catalog(CatalogError::CategoryNotFound(99)))
        ));
        assert_eq!(store.list().await.unwrap()[0].name, "Shoes");
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let store = setup_store().await;
        let created = store.create("Shoes".to_string()).await.unwrap();

        store.delete(created.id).await.unwrap();
        let again = store.delete(created.id).await;

        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(
            again,
            Err(InternalError::Catalog(CatalogError::CategoryNotFound(_)))
        ));
    }
}
