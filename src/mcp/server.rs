//! MCP handler object backed by the tool dispatcher.
//!
//! Framing, the initialize handshake and request correlation are handled by
//! `rmcp`; this type only answers `tools/list` and `tools/call`.

use crate::tools::ToolDispatcher;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct EchoServer {
    dispatcher: Arc<ToolDispatcher>,
    name: String,
    version: String,
}

impl EchoServer {
    pub fn new(dispatcher: Arc<ToolDispatcher>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { dispatcher, name: name.into(), version: version.into() }
    }
}

impl ServerHandler for EchoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.dispatcher.list()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatcher
            .call(&request.name, request.arguments.as_ref())
            .map_err(|e| {
                warn!(tool = %request.name, "tool call rejected: {e}");
                e.into()
            })
    }
}
