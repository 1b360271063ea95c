use super::{Tool, ToolError};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool as ToolDescriptor};
use serde_json::{Value, json};
use std::sync::Arc;

pub const NAME: &str = "echo_tool";
const PREFIX: &str = "Echo: ";

pub struct EchoTool;

impl Tool for EchoTool {
    fn spec(&self) -> ToolDescriptor {
        let schema = json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "The message to echo back"
                }
            },
            "required": ["message"]
        });
        ToolDescriptor::new(
            NAME,
            "Echoes back the input string",
            Arc::new(schema.as_object().cloned().unwrap_or_default()),
        )
    }

    fn call(&self, args: Option<&JsonObject>) -> Result<CallToolResult, ToolError> {
        let message = args
            .and_then(|a| a.get("message"))
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::InvalidArguments(r#"Invalid input: "message" must be a string"#.into()))?;
        Ok(CallToolResult::success(vec![Content::text(format!("{PREFIX}{message}"))]))
    }
}
