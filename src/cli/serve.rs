use crate::api::build_app;
use crate::app_data::AppData;
use poem::{Server, listener::TcpListener};
use std::sync::Arc;

/// Bootstrap the schema, then serve HTTP until the process is stopped
pub async fn run_server(app_data: Arc<AppData>) -> Result<(), Box<dyn std::error::Error>> {
    app_data.bootstrap().await?;

    let address = app_data.settings.server_address();
    let app = build_app(app_data.clone());

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
