//! Tool registration and dispatch.

use std::sync::Arc;

use serde_json::Value;

use crate::config::GatewayState;
use crate::types::{GatewayError, GatewayResult, ToolCallResult, ToolDefinition};

use super::generate_calendar;

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools(state: &Arc<GatewayState>) -> Vec<ToolDefinition> {
        vec![state.tool.clone()]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        state: &Arc<GatewayState>,
    ) -> GatewayResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            generate_calendar::NAME => generate_calendar::execute(args, state).await,
            _ => Err(GatewayError::UnknownTool(name.to_string())),
        }
    }
}
