//! Client Registry - Main entry point
//!
//! Runs the client registry as an MCP server on stdio. All state lives in
//! memory and is lost when the process exits.

use anyhow::Result;
use client_registry::repositories::{ClientRepository, InMemoryClientRepository};
use client_registry::services::{ClientService, ClientServiceImpl, Clock, SystemClock};
use client_registry::{Config, RegistryMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can come from .env
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let client_repo = Arc::new(InMemoryClientRepository::new()) as Arc<dyn ClientRepository>;
    let clock = Arc::new(SystemClock) as Arc<dyn Clock>;
    let client_service = Arc::new(ClientServiceImpl::new(
        client_repo,
        clock,
        config.max_match_results,
        config.match_confidence_threshold,
    )) as Arc<dyn ClientService>;

    let server = RegistryMcpServer::new(client_service, config.report_print_format);

    info!(
        "Client registry initialized (report format: {}, max matches: {})",
        config.report_print_format, config.max_match_results
    );

    info!("Starting MCP server with stdio transport");
    client_registry::server::run_server(server).await?;

    info!("Client registry shutdown complete");
    Ok(())
}
