//! # Job Board
//!
//! Application entry point. Initializes logging, loads configuration,
//! connects the storage backend and serves HTTP.

use anyhow::Result;
use tracing::info;

use job_board::config::Settings;
use job_board::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    job_board::telemetry::init_tracing();

    info!("Starting Job Board...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        backend = ?settings.storage.backend,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
