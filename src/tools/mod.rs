pub mod echo;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, ErrorCode, JsonObject, Tool as ToolDescriptor};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("{0}")]
    InvalidArguments(String),
}

impl From<ToolError> for McpError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::UnknownTool(_) => McpError::new(ErrorCode::METHOD_NOT_FOUND, e.to_string(), None),
            ToolError::InvalidArguments(_) => McpError::invalid_params(e.to_string(), None),
        }
    }
}

pub trait Tool: Send + Sync {
    fn spec(&self) -> ToolDescriptor;
    fn call(&self, args: Option<&JsonObject>) -> Result<CallToolResult, ToolError>;
}

/// Routes tool invocations to the one tool this server exposes.
pub struct ToolDispatcher {
    tool: Box<dyn Tool>,
    spec: ToolDescriptor,
}

impl ToolDispatcher {
    pub fn new(tool: Box<dyn Tool>) -> Self {
        let spec = tool.spec();
        Self { tool, spec }
    }

    pub fn with_default() -> Self {
        Self::new(Box::new(echo::EchoTool))
    }

    pub fn list(&self) -> Vec<ToolDescriptor> {
        vec![self.spec.clone()]
    }

    pub fn call(&self, name: &str, arguments: Option<&JsonObject>) -> Result<CallToolResult, ToolError> {
        if self.spec.name != name {
            return Err(ToolError::UnknownTool(name.to_string()));
        }
        debug!(tool = name, "calling tool");
        self.tool.call(arguments)
    }
}
