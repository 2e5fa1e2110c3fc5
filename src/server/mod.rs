//! MCP server implementation for the client registry.
//!
//! This module provides the MCP protocol server that exposes the input masks,
//! CPF validation, client registry and daily report as tools.

pub mod handlers;

pub use handlers::RegistryMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the registry MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
pub async fn run_server(server: RegistryMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
