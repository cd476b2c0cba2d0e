// CLI module: server startup and schema maintenance

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::app_data::AppData;

/// Storefront admin backend
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Storefront administration backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Bootstrap the schema, seed the default admin and start the HTTP server
    Serve,

    /// Bootstrap the schema and seed the default admin, then exit
    Migrate,
}

/// Execute CLI command
///
/// No subcommand means `serve`.
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(
    cli: Cli,
    app_data: Arc<AppData>,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(app_data).await?,
        Commands::Migrate => migrate::run_migrations(&app_data).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["storefront"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_migrate_subcommand_parses() {
        let cli = Cli::try_parse_from(["storefront", "migrate"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Migrate));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["storefront", "bootstrap"]).is_err());
    }
}
