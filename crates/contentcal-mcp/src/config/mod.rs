//! Configuration loading and the immutable gateway state.

use clap::ValueEnum;
use contentcal::{Backend, CompletionBackend, FunctionBackend};

use crate::tools::generate_calendar;
use crate::types::ToolDefinition;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GENERATE_URL: &str =
    "https://lovable-content-wiz.lovable.app/functions/v1/generate";
pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";

pub const PORT_ENV: &str = "PORT";
pub const BACKEND_ENV: &str = "BACKEND";
pub const GENERATE_URL_ENV: &str = "GENERATE_URL";
pub const COMPLETION_URL_ENV: &str = "COMPLETION_URL";
pub const COMPLETION_MODEL_ENV: &str = "COMPLETION_MODEL";

/// Which generation backend serves tool calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Hosted generation function (arguments forwarded verbatim).
    Function,
    /// Chat-completion API (arguments rendered into a prompt).
    Completion,
}

/// Resolved server configuration. CLI flags win over env vars, env vars over
/// defaults.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub backend: BackendKind,
    pub generate_url: String,
    pub completion_url: String,
    pub completion_model: String,
}

impl GatewayConfig {
    pub fn resolve(port_flag: Option<u16>, backend_flag: Option<BackendKind>) -> Self {
        let port = port_flag
            .or_else(|| std::env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        let backend = backend_flag
            .or_else(|| match std::env::var(BACKEND_ENV).ok().as_deref() {
                Some("function") => Some(BackendKind::Function),
                Some("completion") => Some(BackendKind::Completion),
                Some(other) => {
                    tracing::warn!("Unknown {BACKEND_ENV} value {other:?}, using function");
                    None
                }
                None => None,
            })
            .unwrap_or(BackendKind::Function);

        Self {
            port,
            backend,
            generate_url: env_or(GENERATE_URL_ENV, DEFAULT_GENERATE_URL),
            completion_url: env_or(COMPLETION_URL_ENV, DEFAULT_COMPLETION_URL),
            completion_model: env_or(COMPLETION_MODEL_ENV, DEFAULT_COMPLETION_MODEL),
        }
    }

    pub fn build_backend(&self) -> Backend {
        match self.backend {
            BackendKind::Function => Backend::Function(FunctionBackend::new(&self.generate_url)),
            BackendKind::Completion => Backend::Completion(CompletionBackend::new(
                &self.completion_url,
                &self.completion_model,
            )),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Immutable per-process state shared by every request: the single tool
/// descriptor and the configured backend. Constructed once at startup.
pub struct GatewayState {
    pub tool: ToolDefinition,
    pub backend: Backend,
}

impl GatewayState {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            tool: generate_calendar::definition(),
            backend: config.build_backend(),
        }
    }

    /// State with an explicit backend; used by tests.
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            tool: generate_calendar::definition(),
            backend,
        }
    }
}
