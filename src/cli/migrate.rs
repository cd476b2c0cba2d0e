use crate::app_data::AppData;

/// Run the schema bootstrap and default admin seeding
///
/// # Returns
/// * `Ok(())` - Schema is current and the default admin exists
/// * `Err(...)` - Migration or seeding failed
pub async fn run_migrations(app_data: &AppData) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running schema bootstrap...");

    app_data.bootstrap().await?;

    tracing::info!("Schema bootstrap completed successfully");

    Ok(())
}
