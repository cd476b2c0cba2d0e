use crate::config::{SecretManager, Settings, migrate_database};
use crate::errors::InternalError;
use crate::services::{PageService, UploadService};
use crate::stores::{AdminStore, CategoryStore, OrderStore, ProductStore};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main.rs and shared with the API structs.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   ├─ db (DatabaseConnection)
///   ├─ settings (Arc<Settings>)
///   ├─ admin_store / category_store / product_store / order_store
///   ├─ upload_service (Arc<UploadService>)
///   └─ page_service (Arc<PageService>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to each API struct
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: Arc<Settings>,
    pub admin_store: Arc<AdminStore>,
    pub category_store: Arc<CategoryStore>,
    pub product_store: Arc<ProductStore>,
    pub order_store: Arc<OrderStore>,
    pub upload_service: Arc<UploadService>,
    pub page_service: Arc<PageService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be open; the schema is brought up by
    /// `bootstrap()`.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the uploads directory cannot be created
    pub async fn init(
        db: DatabaseConnection,
        settings: Settings,
        secret_manager: &SecretManager,
    ) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let admin_store = Arc::new(AdminStore::new(
            db.clone(),
            secret_manager.password_pepper().to_string(),
        ));
        let category_store = Arc::new(CategoryStore::new(db.clone()));
        let product_store = Arc::new(ProductStore::new(db.clone()));
        let order_store = Arc::new(OrderStore::new(db.clone()));
        tracing::debug!("Stores created");

        let upload_service = Arc::new(UploadService::new(&settings.uploads_dir).await?);
        let page_service = Arc::new(PageService::new(&settings.pages_dir));

        tracing::info!("AppData initialization complete");

        Ok(Self {
            db,
            settings: Arc::new(settings),
            admin_store,
            category_store,
            product_store,
            order_store,
            upload_service,
            page_service,
        })
    }

    /// Create missing tables and columns, then seed the default admin
    ///
    /// Safe to run any number of times.
    pub async fn bootstrap(&self) -> Result<(), InternalError> {
        migrate_database(&self.db).await?;

        self.admin_store
            .ensure_default_admin(
                &self.settings.default_admin_username,
                &self.settings.default_admin_password,
            )
            .await?;

        Ok(())
    }
}
