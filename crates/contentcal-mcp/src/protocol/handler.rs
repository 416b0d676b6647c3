//! Main request dispatcher — receives JSON-RPC requests, routes to handlers.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::GatewayState;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::validator::validate_request;

/// Dispatches incoming JSON-RPC requests. Stateless: each request is handled
/// independently against the immutable gateway state.
pub struct ProtocolHandler {
    state: Arc<GatewayState>,
}

impl ProtocolHandler {
    pub fn new(state: Arc<GatewayState>) -> Self {
        Self { state }
    }

    /// Handle one request. Always produces a response envelope carrying the
    /// request's correlation id, success or failure.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Value {
        if let Err(e) = validate_request(&request) {
            return serde_json::to_value(e.to_json_rpc_error(request.id)).unwrap_or_default();
        }

        let id = request.id.clone();
        match self.dispatch_request(&request).await {
            Ok(value) => serde_json::to_value(JsonRpcResponse::new(id, value)).unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Request {} failed: {e}", request.method);
                serde_json::to_value(e.to_json_rpc_error(id)).unwrap_or_default()
            }
        }
    }

    async fn dispatch_request(&self, request: &JsonRpcRequest) -> GatewayResult<Value> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(request.params.clone()).await,
            "ping" => Ok(json!({ "ok": true })),
            _ => Err(GatewayError::MethodNotFound(request.method.clone())),
        }
    }

    fn handle_initialize(&self) -> GatewayResult<Value> {
        serde_json::to_value(InitializeResult::default_result())
            .map_err(|e| GatewayError::Internal(e.to_string()))
    }

    fn handle_tools_list(&self) -> GatewayResult<Value> {
        let result = ToolListResult {
            tools: ToolRegistry::list_tools(&self.state),
            next_cursor: None,
        };
        serde_json::to_value(result).map_err(|e| GatewayError::Internal(e.to_string()))
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> GatewayResult<Value> {
        let call_params: ToolCallParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| GatewayError::InvalidParams(e.to_string()))?
            .ok_or_else(|| GatewayError::InvalidParams("Tool call params required".to_string()))?;

        let result =
            ToolRegistry::call(&call_params.name, call_params.arguments, &self.state).await?;

        serde_json::to_value(result).map_err(|e| GatewayError::Internal(e.to_string()))
    }
}
