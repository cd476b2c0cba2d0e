mod config_spec;
mod database;
mod env_provider;
mod errors;
mod logging;
mod secret_manager;
mod settings;

pub use config_spec::ConfigSpec;
pub use database::{init_database, migrate_database};
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::ConfigError;
pub use logging::{LoggingConfig, LoggingError, init_logging};
pub use secret_manager::SecretManager;
pub use settings::Settings;
