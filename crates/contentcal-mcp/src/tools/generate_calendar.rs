//! Tool: generateCalendar — 30-day social calendar + 5 LinkedIn posts.

use std::sync::Arc;

use serde_json::{json, Value};

use contentcal::{check_payload, CalendarRequest, DEFAULT_TONE};

use crate::config::GatewayState;
use crate::types::{GatewayResult, ToolCallResult, ToolDefinition};

pub const NAME: &str = "generateCalendar";

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: Some("Generate a 30-day social calendar + 5 LinkedIn posts.".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "brand": { "type": "string", "description": "Brand name" },
                "audience": { "type": "string", "description": "Target audience" },
                "tone": { "type": "string", "description": "Writing tone", "default": DEFAULT_TONE },
                "start_date": { "type": "string", "description": "YYYY-MM-DD", "pattern": "^\\d{4}-\\d{2}-\\d{2}$" },
                "key_dates": { "type": "array", "items": { "type": "string" }, "description": "e.g., ['2025-10-15 Product Update']" },
                "urls": { "type": "array", "items": { "type": "string" }, "description": "Reference URLs" }
            },
            "required": ["brand", "audience"],
            "additionalProperties": false
        }),
    }
}

pub async fn execute(args: Value, state: &Arc<GatewayState>) -> GatewayResult<ToolCallResult> {
    let request = CalendarRequest::from_args(&args)?;

    let payload = state.backend.generate(&request).await?;

    // Contract violations are warnings only; the payload passes through
    // verbatim.
    for violation in check_payload(&payload, !request.urls.is_empty()) {
        tracing::warn!("Generated payload violates contract: {violation}");
    }

    Ok(ToolCallResult::success("Calendar generated.", payload))
}
