//! Chat-completion API backend.

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{GenerationError, GenerationResult};
use crate::extract::extract_json;
use crate::prompt::{render_user_prompt, SYSTEM_PROMPT};
use crate::request::CalendarRequest;

/// Env var holding the bearer credential for the completion API.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Sampling temperature for calendar generation.
const TEMPERATURE: f64 = 0.7;

/// Client for an OpenAI-style chat-completions endpoint. The request is
/// rendered into a fixed prompt pair and the completion text is parsed back
/// into the payload object.
#[derive(Debug, Clone)]
pub struct CompletionBackend {
    url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl CompletionBackend {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate(&self, request: &CalendarRequest) -> GenerationResult<Value> {
        // Read the credential per request so a missing key surfaces as an
        // RPC error instead of failing startup.
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingCredential(API_KEY_ENV))?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": render_user_prompt(request, Utc::now().date_naive())
                },
            ],
            "response_format": { "type": "json_object" },
            "temperature": TEMPERATURE,
        });

        tracing::debug!("Requesting completion from {} ({})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {key}"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default();

        extract_json(content).ok_or(GenerationError::ModelOutputInvalid)
    }
}
