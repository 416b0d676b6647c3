//! ContentCal — core library for social-calendar generation: typed request
//! validation, prompt rendering, completion parsing, and generation backends.

pub mod backend;
pub mod contract;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod request;

pub use backend::{Backend, CompletionBackend, FunctionBackend};
pub use contract::check_payload;
pub use error::{GenerationError, GenerationResult};
pub use extract::extract_json;
pub use prompt::{campaign_month, campaign_slug, render_user_prompt, SYSTEM_PROMPT};
pub use request::{CalendarRequest, ValidationError, DEFAULT_TONE};
