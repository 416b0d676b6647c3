//! Error types and JSON-RPC error codes for the gateway.

use contentcal::{GenerationError, ValidationError};

use super::message::{JsonRpcError, JsonRpcErrorObject, RequestId, JSONRPC_VERSION};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Gateway-specific codes in the implementation-defined server range.
pub mod gateway_error_codes {
    pub const GENERATION_FAILED: i32 = -32000;
    pub const MODEL_OUTPUT_INVALID: i32 = -32001;
    pub const CREDENTIAL_MISSING: i32 = -32002;
}

/// All errors that can occur while handling a request. Every variant is
/// converted to an error envelope at the dispatch boundary; none escape as
/// transport faults.
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required arguments: {}", .0.join(", "))]
    MissingArguments(Vec<&'static str>),

    /// Backend answered with a non-2xx status; the code mirrors it.
    #[error("Upstream error: {body}")]
    Upstream { status: u16, body: String },

    #[error("Model did not return JSON")]
    ModelOutputInvalid,

    #[error("Missing credential: {0} is not set")]
    CredentialMissing(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        use gateway_error_codes::*;
        match self {
            GatewayError::ParseError(_) => PARSE_ERROR,
            GatewayError::InvalidRequest(_) => INVALID_REQUEST,
            GatewayError::MethodNotFound(_) => METHOD_NOT_FOUND,
            GatewayError::InvalidParams(_)
            | GatewayError::UnknownTool(_)
            | GatewayError::MissingArguments(_) => INVALID_PARAMS,
            GatewayError::Upstream { status, .. } => i32::from(*status),
            GatewayError::ModelOutputInvalid => MODEL_OUTPUT_INVALID,
            GatewayError::CredentialMissing(_) => CREDENTIAL_MISSING,
            GatewayError::Internal(_) => GENERATION_FAILED,
            GatewayError::Transport(_) | GatewayError::Io(_) => INTERNAL_ERROR,
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        JsonRpcError {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorObject {
                code: self.code(),
                message: self.to_string(),
                data: None,
            },
        }
    }
}

impl From<GenerationError> for GatewayError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Upstream { status, body } => GatewayError::Upstream { status, body },
            GenerationError::ModelOutputInvalid => GatewayError::ModelOutputInvalid,
            GenerationError::MissingCredential(var) => GatewayError::CredentialMissing(var),
            GenerationError::Transport(e) => GatewayError::Internal(e.to_string()),
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::MissingFields(fields) => GatewayError::MissingArguments(fields),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_code_mirrors_status() {
        let err = GatewayError::Upstream {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.code(), 503);
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn test_error_envelope_preserves_id() {
        let err = GatewayError::MethodNotFound("nope".to_string());
        let envelope = err.to_json_rpc_error(RequestId::Number(9));
        assert_eq!(envelope.id, RequestId::Number(9));
        assert_eq!(envelope.error.code, error_codes::METHOD_NOT_FOUND);
    }
}
