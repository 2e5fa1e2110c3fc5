//! MCP tool handlers for the client registry.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::{format_identifier, format_phone, validate_identifier, ClientId};
use crate::error::RegistryError;
use crate::models::{Client, NewClient};
use crate::report::PrintFormat;
use crate::services::ClientService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the client registry as tools.
#[derive(Clone)]
pub struct RegistryMcpServer {
    client_service: Arc<dyn ClientService>,
    default_print_format: PrintFormat,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for RegistryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "client-registry".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Client registration desk - formats and validates CPF and phone input, registers clients in memory, and prints the daily registration report.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct RawInputParams {
    /// Text as typed so far
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ClientIdParams {
    client_id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FindClientParams {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
    #[serde(default)]
    min_confidence: Option<u8>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DailyReportParams {
    #[serde(default)]
    format: Option<PrintFormat>,
}

// Helper function to convert registry errors to MCP errors
fn to_mcp_error(e: RegistryError) -> McpError {
    let code = if e.is_validation() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::RESOURCE_NOT_FOUND
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn parse_client_id(id: u64) -> Result<ClientId, McpError> {
    ClientId::new(id).map_err(|e| to_mcp_error(e.into()))
}

/// Client as shown in the list view, with display-form fields.
fn client_json(client: &Client) -> serde_json::Value {
    serde_json::json!({
        "id": client.id,
        "cpf": client.cpf.formatted(),
        "name": client.name,
        "phone": client.phone.formatted(),
        "phone_kind": client.phone.kind(),
        "registered_at": client.registered_at.format("%d/%m/%Y %H:%M:%S").to_string(),
        "treatment_status": client.treatment_status(),
        "birth_date": client.birth_date.map(|d| d.format("%d/%m/%Y").to_string()),
        "medication": client.medication.as_deref().unwrap_or("-"),
        "support_done": client.support_done,
    })
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl RegistryMcpServer {
    /// Create a new registry MCP server.
    pub fn new(client_service: Arc<dyn ClientService>, default_print_format: PrintFormat) -> Self {
        Self {
            client_service,
            default_print_format,
            tool_router: Self::tool_router(),
        }
    }

    /// Apply the CPF mask to partial input.
    #[tool(
        description = "Apply the CPF input mask (XXX.XXX.XXX-XX) to the text typed so far. Input with more than 11 digits is returned unchanged."
    )]
    async fn format_cpf(
        &self,
        params: Parameters<RawInputParams>,
    ) -> Result<CallToolResult, McpError> {
        let formatted = format_identifier(&params.0.value);
        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Apply the phone mask to partial input.
    #[tool(
        description = "Apply the Brazilian phone mask ((XX) XXXXX-XXXX for mobile, (XX) XXXX-XXXX for landline) to the text typed so far. Input with more than 11 digits is returned unchanged."
    )]
    async fn format_phone(
        &self,
        params: Parameters<RawInputParams>,
    ) -> Result<CallToolResult, McpError> {
        let formatted = format_phone(&params.0.value);
        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Check CPF check digits.
    #[tool(description = "Check whether a CPF (with or without punctuation) has valid check digits")]
    async fn validate_cpf(
        &self,
        params: Parameters<RawInputParams>,
    ) -> Result<CallToolResult, McpError> {
        let value = params.0.value;
        json_result(&serde_json::json!({
            "cpf": format_identifier(&value),
            "valid": validate_identifier(&value),
        }))
    }

    /// Register a new client.
    #[tool(
        description = "Register a new client. Requires CPF, name and phone; a birth date (YYYY-MM-DD) is required for antibiotic treatment. Rejects invalid CPFs, phones without 10 or 11 digits and CPFs already registered."
    )]
    async fn register_client(
        &self,
        params: Parameters<NewClient>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: register_client called");

        let client = self
            .client_service
            .register(params.0)
            .await
            .map_err(|e| {
                tracing::warn!("Registration rejected: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({
            "message": "Client registered successfully",
            "client": client_json(&client),
        }))
    }

    /// List every registered client.
    #[tool(description = "List all registered clients in registration order")]
    async fn list_clients(&self) -> Result<CallToolResult, McpError> {
        let clients = self.client_service.list().await.map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "total": clients.len(),
            "clients": clients.iter().map(client_json).collect::<Vec<_>>(),
        }))
    }

    /// Retrieve one client.
    #[tool(description = "Retrieve a registered client by ID")]
    async fn get_client(
        &self,
        params: Parameters<ClientIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_client_id(params.0.client_id)?;
        let client = self.client_service.get(id).await.map_err(to_mcp_error)?;
        json_result(&client_json(&client))
    }

    /// Remove a client.
    #[tool(description = "Remove a registered client by ID")]
    async fn remove_client(
        &self,
        params: Parameters<ClientIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_client_id(params.0.client_id)?;
        let removed = self.client_service.remove(id).await.map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "message": "Client removed successfully",
            "client": client_json(&removed),
        }))
    }

    /// Toggle "support done".
    #[tool(description = "Toggle whether support has been done for a client")]
    async fn toggle_support(
        &self,
        params: Parameters<ClientIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_client_id(params.0.client_id)?;
        let client = self
            .client_service
            .toggle_support(id)
            .await
            .map_err(to_mcp_error)?;
        json_result(&client_json(&client))
    }

    /// Search clients.
    #[tool(
        description = "Find clients by fuzzy name match, or exactly by CPF or phone digits. Returns matches with confidence scores."
    )]
    async fn find_client(
        &self,
        params: Parameters<FindClientParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let matches = self
            .client_service
            .search(params.query.clone(), params.max_results, params.min_confidence)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "query": params.query,
            "matches": matches.iter().map(|m| {
                serde_json::json!({
                    "client": client_json(&m.client),
                    "confidence": m.confidence,
                    "match_type": format!("{:?}", m.match_type),
                })
            }).collect::<Vec<_>>(),
        }))
    }

    /// Clients registered today.
    #[tool(description = "List the clients registered today")]
    async fn clients_registered_today(&self) -> Result<CallToolResult, McpError> {
        let clients = self
            .client_service
            .registered_today()
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "total": clients.len(),
            "clients": clients.iter().map(client_json).collect::<Vec<_>>(),
        }))
    }

    /// Printable daily report.
    #[tool(
        description = "Render the printable report of today's registrations. Format is portrait (A4), landscape (A4) or receipt; defaults to the configured format."
    )]
    async fn daily_report(
        &self,
        params: Parameters<DailyReportParams>,
    ) -> Result<CallToolResult, McpError> {
        let format = params.0.format.unwrap_or(self.default_print_format);
        let report = self
            .client_service
            .daily_report()
            .await
            .map_err(to_mcp_error)?;

        tracing::debug!(format = %format, total = report.total(), "Rendering daily report");
        Ok(CallToolResult::success(vec![Content::text(
            report.render(format),
        )]))
    }
}
