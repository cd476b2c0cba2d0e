use crate::errors::InternalError;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Connect to the store
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::info!("Connected to database: {}", database_url);

    Ok(db)
}

/// Bring the schema up to date
///
/// Every migration is idempotent on its own, so this is safe to run against
/// a store created by an older build.
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::info!("Database migrations completed");

    Ok(())
}
