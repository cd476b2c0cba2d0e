use clap::Parser;
use std::sync::Arc;
use storefront_backend::app_data::AppData;
use storefront_backend::cli::{self, Cli};
use storefront_backend::config::{
    LoggingConfig, SecretManager, Settings, SystemEnvironment, init_database, init_logging,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let env = SystemEnvironment;

    if let Err(e) = init_logging(&LoggingConfig::from_env_provider(&env)) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli, &env).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, env: &SystemEnvironment) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env_provider(env)?;
    let secret_manager = SecretManager::from_env_provider(env)?;

    let db = init_database(&settings.database_url).await?;
    let app_data = Arc::new(AppData::init(db, settings, &secret_manager).await?);

    cli::execute_command(cli, app_data).await
}
