//! MCP server handler
//!
//! Dispatches `tools/call` requests to the registry and maps failures onto the
//! two reporting channels:
//! - protocol errors (unknown tool, invalid arguments, extraction failures)
//! - tool-result errors (registry 404 and any other HTTP-layer failure)

use crate::error::{RegistryError, ToolError};
use crate::registry::RegistryAdapter;
use crate::server::tools::{self, ToolRequest};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorCode, Implementation, JsonObject,
    ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Server name reported during initialization
pub const SERVER_NAME: &str = "clojars-deps-server";

const INSTRUCTIONS: &str = "Look up Clojars dependencies given as \"group/artifact\". \
Use get_clojars_latest_version for the current release and \
check_clojars_version_exists to verify a specific version.";

/// Clojars MCP server
#[derive(Clone)]
pub struct ClojarsServer {
    registry: Arc<dyn RegistryAdapter>,
}

impl ClojarsServer {
    pub fn new(registry: Arc<dyn RegistryAdapter>) -> Self {
        Self { registry }
    }

    /// Handle one tool call by name and raw arguments
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let request = ToolRequest::parse(name, arguments).map_err(protocol_error)?;
        debug!(
            tool = request.tool_name(),
            dependency = %request.dependency(),
            "handling tool call"
        );

        let outcome = match &request {
            ToolRequest::LatestVersion { dependency } => self
                .registry
                .latest_version(dependency)
                .await
                .map(|result| render(&result)),
            ToolRequest::VersionExists {
                dependency,
                version,
            } => self
                .registry
                .check_version(dependency, version)
                .await
                .map(|result| render(&result)),
        };

        match outcome {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text?)])),
            Err(err) if err.is_http_layer() => Ok(registry_failure(&request, err)),
            Err(err) => Err(protocol_error(err.into())),
        }
    }
}

impl ServerHandler for ClojarsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(tools::catalog()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}

/// Render a lookup result as indented JSON
fn render<T: Serialize>(result: &T) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ErrorData::internal_error(format!("failed to render result: {}", e), None))
}

/// Tool-result error for an HTTP-layer registry failure
fn registry_failure(request: &ToolRequest, err: RegistryError) -> CallToolResult {
    let message = match &err {
        RegistryError::NotFound { .. } => {
            format!("Dependency {} not found on Clojars", request.dependency())
        }
        _ => format!("Clojars API error: {}", err),
    };
    warn!(tool = request.tool_name(), error = %err, "registry lookup failed");
    CallToolResult::error(vec![Content::text(message)])
}

fn protocol_error(err: ToolError) -> ErrorData {
    match err {
        ToolError::UnknownTool { .. } => {
            ErrorData::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
        }
        ToolError::InvalidArguments { .. } => ErrorData::invalid_params(err.to_string(), None),
        ToolError::Registry(_) => ErrorData::internal_error(err.to_string(), None),
    }
}
