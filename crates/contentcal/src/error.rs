//! Error types for the generation pipeline.

/// All errors that can occur while producing a calendar payload.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// Backend answered with a non-2xx status.
    #[error("Upstream error: {body}")]
    Upstream { status: u16, body: String },

    /// Every extraction strategy failed on the completion text.
    #[error("Model did not return JSON")]
    ModelOutputInvalid,

    /// The credential env var is unset or empty.
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type GenerationResult<T> = Result<T, GenerationError>;
