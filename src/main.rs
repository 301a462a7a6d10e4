//! # Barbershop API
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Storage (PostgreSQL or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use barbershop::config::Settings;
use barbershop::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration decides the log format, so it is loaded first
    let settings = Settings::load()?;
    barbershop::telemetry::init_tracing(&settings.telemetry);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
