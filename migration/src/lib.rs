pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_admin;
mod m20250301_000002_create_products;
mod m20250301_000003_create_categories;
mod m20250301_000004_add_product_category;
mod m20250301_000005_create_orders;

/// Schema for the storefront database
///
/// Every migration is written so its DDL is safe to replay against a database
/// that already has the objects, even if the migration history table is gone.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_admin::Migration),
            Box::new(m20250301_000002_create_products::Migration),
            Box::new(m20250301_000003_create_categories::Migration),
            Box::new(m20250301_000004_add_product_category::Migration),
            Box::new(m20250301_000005_create_orders::Migration),
        ]
    }
}
