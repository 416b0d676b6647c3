//! Generation backends — the external collaborators that produce content.

pub mod completion;
pub mod function;

pub use completion::CompletionBackend;
pub use function::FunctionBackend;

use serde_json::Value;

use crate::error::GenerationResult;
use crate::request::CalendarRequest;

/// A configured generation backend. Exactly one variant is active per
/// process; each call is a single awaited round trip with no retry.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Hosted generation function that answers with the payload JSON.
    Function(FunctionBackend),
    /// Chat-completion API whose completion text carries the payload.
    Completion(CompletionBackend),
}

impl Backend {
    /// Produce a calendar payload for a validated request.
    pub async fn generate(&self, request: &CalendarRequest) -> GenerationResult<Value> {
        match self {
            Backend::Function(backend) => backend.generate(request).await,
            Backend::Completion(backend) => backend.generate(request).await,
        }
    }
}
