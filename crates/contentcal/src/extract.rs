//! JSON extraction from completion text.
//!
//! Strategies are tried in order; the first success wins.

use serde_json::Value;

type Strategy = fn(&str) -> Option<Value>;

const STRATEGIES: &[Strategy] = &[parse_direct, parse_trailing_object];

/// Extract a JSON object from completion text, or `None` when every strategy
/// fails.
pub fn extract_json(text: &str) -> Option<Value> {
    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// The whole completion, trimmed, is one JSON object.
fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text.trim())
        .ok()
        .filter(Value::is_object)
}

/// The last top-level `{...}` in the text, e.g. an object trailing prose or
/// wrapped in a code fence. String literals inside the object are respected
/// so braces in values do not break the balance scan.
fn parse_trailing_object(text: &str) -> Option<Value> {
    let mut depth = 0usize;
    let mut start = None;
    let mut last_object = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' if depth > 0 => in_string = true,
            b'{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start {
                        last_object = Some((s, i));
                    }
                }
            }
            _ => {}
        }
    }

    let (s, e) = last_object?;
    serde_json::from_str(&text[s..=e])
        .ok()
        .filter(Value::is_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_parse_wins() {
        let value = extract_json(r#" {"calendar": []} "#).unwrap();
        assert_eq!(value, json!({"calendar": []}));
    }

    #[test]
    fn test_trailing_object_after_prose() {
        let text = "Here is your calendar:\n\n{\"calendar\": [], \"hashtags\": [\"#a\"]}";
        let value = extract_json(text).unwrap();
        assert_eq!(value["hashtags"], json!(["#a"]));
    }

    #[test]
    fn test_code_fenced_object() {
        let text = "```json\n{\"calendar\": []}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({"calendar": []}));
    }

    #[test]
    fn test_last_object_wins() {
        let text = r#"{"draft": 1} revised to {"final": 2}"#;
        assert_eq!(extract_json(text).unwrap(), json!({"final": 2}));
    }

    #[test]
    fn test_braces_inside_strings() {
        let text = r#"note {"text": "curly } inside"} done"#;
        assert_eq!(
            extract_json(text).unwrap(),
            json!({"text": "curly } inside"})
        );
    }

    #[test]
    fn test_not_json_fails() {
        assert!(extract_json("not json").is_none());
        assert!(extract_json("").is_none());
        assert!(extract_json("[1, 2, 3]").is_none());
        assert!(extract_json("unbalanced { brace").is_none());
    }
}
