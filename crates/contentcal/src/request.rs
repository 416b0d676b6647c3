//! Typed tool arguments and validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default writing tone when the caller does not supply one.
pub const DEFAULT_TONE: &str = "Confident, friendly";

/// Validated arguments for a `generateCalendar` call.
///
/// Construct via [`CalendarRequest::from_args`]; the serialized form is what
/// the function backend receives verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarRequest {
    pub brand: String,
    pub audience: String,
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default)]
    pub key_dates: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Why raw arguments failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required arguments: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl CalendarRequest {
    /// Build a validated request from raw tool arguments.
    ///
    /// `brand` and `audience` must be non-empty strings. Optional fields with
    /// the wrong type are treated as absent rather than rejected: `tone`
    /// falls back to [`DEFAULT_TONE`], `key_dates` and `urls` fall back to
    /// empty lists (non-string elements are dropped), and a `start_date` that
    /// does not look like `YYYY-MM-DD` is ignored.
    pub fn from_args(args: &Value) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();
        let brand = required_string(args, "brand", &mut missing);
        let audience = required_string(args, "audience", &mut missing);

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Self {
            brand: brand.unwrap_or_default(),
            audience: audience.unwrap_or_default(),
            tone: optional_string(args, "tone").unwrap_or_else(|| DEFAULT_TONE.to_string()),
            start_date: optional_string(args, "start_date").filter(|s| is_iso_date(s)),
            key_dates: string_array(args, "key_dates"),
            urls: string_array(args, "urls"),
        })
    }
}

fn required_string(
    args: &Value,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match args.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            missing.push(key);
            None
        }
    }
}

fn optional_string(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_array(args: &Value, key: &str) -> Vec<String> {
    args.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Shape check for `YYYY-MM-DD` without validating the calendar date itself.
fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_valid_args() {
        let req =
            CalendarRequest::from_args(&json!({"brand": "Acme", "audience": "CTOs"})).unwrap();
        assert_eq!(req.brand, "Acme");
        assert_eq!(req.audience, "CTOs");
        assert_eq!(req.tone, DEFAULT_TONE);
        assert_eq!(req.start_date, None);
        assert!(req.key_dates.is_empty());
        assert!(req.urls.is_empty());
    }

    #[test]
    fn test_missing_required_fields_are_named() {
        let err = CalendarRequest::from_args(&json!({})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["brand", "audience"])
        );
        assert!(err.to_string().contains("brand"));
        assert!(err.to_string().contains("audience"));
    }

    #[test]
    fn test_empty_or_non_string_required_fields_fail() {
        let err =
            CalendarRequest::from_args(&json!({"brand": "", "audience": 42})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["brand", "audience"])
        );
    }

    #[test]
    fn test_wrong_typed_optionals_coerce_to_defaults() {
        let req = CalendarRequest::from_args(&json!({
            "brand": "Acme",
            "audience": "CTOs",
            "tone": 7,
            "key_dates": "not-an-array",
            "urls": {"nope": true}
        }))
        .unwrap();
        assert_eq!(req.tone, DEFAULT_TONE);
        assert!(req.key_dates.is_empty());
        assert!(req.urls.is_empty());
    }

    #[test]
    fn test_non_string_array_elements_dropped() {
        let req = CalendarRequest::from_args(&json!({
            "brand": "Acme",
            "audience": "CTOs",
            "key_dates": ["2025-10-15 Launch", 99, null],
            "urls": ["https://acme.test", false]
        }))
        .unwrap();
        assert_eq!(req.key_dates, vec!["2025-10-15 Launch"]);
        assert_eq!(req.urls, vec!["https://acme.test"]);
    }

    #[test]
    fn test_start_date_shape() {
        let good = CalendarRequest::from_args(&json!({
            "brand": "Acme", "audience": "CTOs", "start_date": "2025-10-01"
        }))
        .unwrap();
        assert_eq!(good.start_date.as_deref(), Some("2025-10-01"));

        let bad = CalendarRequest::from_args(&json!({
            "brand": "Acme", "audience": "CTOs", "start_date": "Oct 1st"
        }))
        .unwrap();
        assert_eq!(bad.start_date, None);
    }

    #[test]
    fn test_serialized_form_omits_absent_start_date() {
        let req =
            CalendarRequest::from_args(&json!({"brand": "Acme", "audience": "CTOs"})).unwrap();
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("start_date").is_none());
        assert_eq!(value["tone"], DEFAULT_TONE);
        assert_eq!(value["key_dates"], json!([]));
    }
}
