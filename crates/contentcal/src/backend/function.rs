//! Hosted generation function backend.

use serde_json::Value;

use crate::error::{GenerationError, GenerationResult};
use crate::request::CalendarRequest;

/// Client for a hosted generation function. The validated arguments are
/// forwarded verbatim as the JSON body; the response body is the payload.
#[derive(Debug, Clone)]
pub struct FunctionBackend {
    url: String,
    client: reqwest::Client,
}

impl FunctionBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate(&self, request: &CalendarRequest) -> GenerationResult<Value> {
        tracing::debug!("Forwarding {} request to {}", request.brand, self.url);

        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
