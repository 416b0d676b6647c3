//! JSON-RPC envelope validation.

use crate::types::{GatewayError, GatewayResult, JsonRpcRequest, JSONRPC_VERSION};

/// Validate that a JSON-RPC request envelope is well-formed.
pub fn validate_request(request: &JsonRpcRequest) -> GatewayResult<()> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(GatewayError::InvalidRequest(format!(
            "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{}\"",
            request.jsonrpc
        )));
    }

    if request.method.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    Ok(())
}
