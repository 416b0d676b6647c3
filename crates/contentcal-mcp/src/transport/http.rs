//! HTTP transport — JSON-RPC over POST with a /health probe.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json as AxumJson,
    routing::{get, post},
    Router,
};
use serde_json::Value;

use crate::protocol::ProtocolHandler;
use crate::types::{GatewayError, GatewayResult, JsonRpcRequest, RequestId};

/// Maximum accepted request-body size.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// HTTP transport for web-based MCP clients.
pub struct HttpTransport {
    handler: Arc<ProtocolHandler>,
}

impl HttpTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> GatewayResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(GatewayError::Io)?;

        tracing::info!("MCP JSON-RPC server listening on {addr} (/, /mcp)");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(())
    }

    /// Build the router. Some clients hit "/" first, so the RPC handler is
    /// mounted at both paths.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", post(handle_rpc))
            .route("/mcp", post(handle_rpc))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .route("/health", get(handle_health))
            .with_state(self.handler.clone())
    }
}

/// Handle a JSON-RPC request body. Envelopes that do not deserialize are
/// answered with a parse-error envelope and a null id.
async fn handle_rpc(
    State(handler): State<Arc<ProtocolHandler>>,
    AxumJson(body): AxumJson<Value>,
) -> AxumJson<Value> {
    let request: JsonRpcRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            let error = GatewayError::ParseError(e.to_string()).to_json_rpc_error(RequestId::Null);
            return AxumJson(serde_json::to_value(error).unwrap_or_default());
        }
    };

    AxumJson(handler.handle_request(request).await)
}

/// Liveness probe — no auth, no body semantics.
async fn handle_health() -> AxumJson<Value> {
    AxumJson(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
