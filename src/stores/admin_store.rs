use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::services::crypto;
use crate::types::db::admin::{self, ActiveModel, Entity as Admin};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

/// AdminStore manages the admin accounts allowed to log in
pub struct AdminStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl AdminStore {
    /// Create a new AdminStore
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `password_pepper` - The secret mixed into password hashes (from SecretManager)
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self {
            db,
            password_pepper,
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<admin::Model>, InternalError> {
        Admin::find()
            .filter(admin::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_admin", e))
    }

    /// Insert the default admin unless one with that username exists
    ///
    /// # Returns
    /// * `Ok(true)` - The account was created
    /// * `Ok(false)` - An account with that username was already present
    pub async fn ensure_default_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, InternalError> {
        if self.find_by_username(username).await?.is_some() {
            tracing::info!("Default admin '{}' already exists, skipping", username);
            return Ok(false);
        }

        let password_hash = crypto::hash_password(&self.password_pepper, password)?;

        let new_admin = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        new_admin
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_default_admin", e))?;

        tracing::info!("Default admin '{}' created", username);

        Ok(true)
    }

    /// Verify admin credentials and return the username on success
    ///
    /// # Errors
    /// * `CredentialError::UserNotFound` - no admin with that username
    /// * `CredentialError::IncorrectPassword` - the password did not match
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, InternalError> {
        let admin = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| CredentialError::UserNotFound(username.to_string()))?;

        if !crypto::verify_password(&self.password_pepper, password, &admin.password_hash)? {
            return Err(CredentialError::IncorrectPassword(username.to_string()).into());
        }

        Ok(admin.username)
    }
}

impl std::fmt::Debug for AdminStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdminStore {{ db: <connection>, password_pepper: <redacted> }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{TEST_PEPPER, setup_test_db};
    use sea_orm::PaginatorTrait;

    async fn setup_store() -> (DatabaseConnection, AdminStore) {
        let db = setup_test_db().await;
        let store = AdminStore::new(db.clone(), TEST_PEPPER.to_string());
        (db, store)
    }

    #[tokio::test]
    async fn test_default_admin_is_created_once() {
        let (db, store) = setup_store().await;

        assert!(store.ensure_default_admin("fouzi", "admin-V1").await.unwrap());
        assert!(!store.ensure_default_admin("fouzi", "admin-V1").await.unwrap());

        let count = Admin::find().count(&db).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let (db, store) = setup_store().await;
        store.ensure_default_admin("fouzi", "admin-V1").await.unwrap();

        let row = Admin::find().one(&db).await.unwrap().unwrap();

        assert!(row.password_hash.starts_with("$argon2"));
        assert_ne!(row.password_hash, "admin-V1");
    }

    #[tokio::test]
    async fn test_verify_credentials_success() {
        let (_db, store) = setup_store().await;
        store.ensure_default_admin("fouzi", "admin-V1").await.unwrap();

        let username = store.verify_credentials("fouzi", "admin-V1").await.unwrap();

        assert_eq!(username, "fouzi");
    }

    #[tokio::test]
    async fn test_verify_credentials_unknown_user() {
        let (_db, store) = setup_store().await;
        store.ensure_default_admin("fouzi", "admin-V1").await.unwrap();

        let result = store.verify_credentials("nobody", "admin-V1").await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::UserNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_verify_credentials_wrong_password() {
        let (_db, store) = setup_store().await;
        store.ensure_default_admin("fouzi", "admin-V1").await.unwrap();

        let result = store.verify_credentials("fouzi", "wrong").await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::IncorrectPassword(_)))
        ));
    }

    #[tokio::test]
    async fn test_other_pepper_cannot_verify() {
        let (db, store) = setup_store().await;
        store.ensure_default_admin("fouzi", "admin-V1").await.unwrap();

        let other = AdminStore::new(db, "a-different-pepper-value".to_string());
        let result = other.verify_credentials("fouzi", "admin-V1").await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::IncorrectPassword(_)))
        ));
    }
}
