// Test utilities shared across unit tests
// Only compiled when running tests

use crate::config::{init_database, migrate_database};
use crate::errors::InternalError;
use sea_orm::DatabaseConnection;

pub const TEST_PEPPER: &str = "test-pepper-for-unit-tests";

/// Creates an in-memory database with every migration applied
pub async fn setup_test_db() -> DatabaseConnection {
    try_setup_test_db()
        .await
        .expect("Failed to create test database")
}

async fn try_setup_test_db() -> Result<DatabaseConnection, InternalError> {
    let db = init_database("sqlite::memory:").await?;
    migrate_database(&db).await?;
    Ok(db)
}
