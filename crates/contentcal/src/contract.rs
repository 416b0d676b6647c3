//! Output-contract checks for generated payloads.
//!
//! The gateway forwards payloads verbatim; violations found here are only
//! surfaced as warnings.

use serde_json::Value;

/// Expected number of calendar entries.
pub const CALENDAR_LEN: usize = 30;

/// Expected number of LinkedIn posts.
pub const POSTS_LEN: usize = 5;

/// Maximum calendar-entry title length, in characters.
pub const MAX_TITLE_LEN: usize = 70;

/// Allowed hashtag count range.
pub const HASHTAG_RANGE: std::ops::RangeInclusive<usize> = 3..=8;

const ENTRY_FIELDS: &[&str] = &["date", "theme", "title", "hook", "cta"];

/// Check a generated payload against the output contract and return every
/// violation found. An empty result means the payload conforms.
pub fn check_payload(payload: &Value, had_urls: bool) -> Vec<String> {
    let mut violations = Vec::new();

    check_calendar(payload, &mut violations);
    check_posts(payload, &mut violations);
    check_hashtags(payload, &mut violations);
    check_utms(payload, had_urls, &mut violations);

    violations
}

fn check_calendar(payload: &Value, violations: &mut Vec<String>) {
    let Some(calendar) = payload.get("calendar").and_then(Value::as_array) else {
        violations.push("calendar is missing or not an array".to_string());
        return;
    };

    if calendar.len() != CALENDAR_LEN {
        violations.push(format!(
            "calendar has {} entries, expected {CALENDAR_LEN}",
            calendar.len()
        ));
    }

    for (i, entry) in calendar.iter().enumerate() {
        for &field in ENTRY_FIELDS {
            if entry.get(field).and_then(Value::as_str).is_none() {
                violations.push(format!("calendar[{i}].{field} is missing or not a string"));
            }
        }
        if let Some(date) = entry.get("date").and_then(Value::as_str) {
            if date.parse::<chrono::NaiveDate>().is_err() {
                violations.push(format!("calendar[{i}].date {date:?} is not an ISO date"));
            }
        }
        if let Some(title) = entry.get("title").and_then(Value::as_str) {
            let len = title.chars().count();
            if len > MAX_TITLE_LEN {
                violations.push(format!(
                    "calendar[{i}].title is {len} chars, max {MAX_TITLE_LEN}"
                ));
            }
        }
    }
}

fn check_posts(payload: &Value, violations: &mut Vec<String>) {
    let Some(posts) = payload.get("linkedin_posts").and_then(Value::as_array) else {
        violations.push("linkedin_posts is missing or not an array".to_string());
        return;
    };

    if posts.len() != POSTS_LEN {
        violations.push(format!(
            "linkedin_posts has {} entries, expected {POSTS_LEN}",
            posts.len()
        ));
    }

    for (i, post) in posts.iter().enumerate() {
        if post.get("text").and_then(Value::as_str).is_none() {
            violations.push(format!("linkedin_posts[{i}].text is missing or not a string"));
        }
    }
}

fn check_hashtags(payload: &Value, violations: &mut Vec<String>) {
    let Some(hashtags) = payload.get("hashtags").and_then(Value::as_array) else {
        violations.push("hashtags is missing or not an array".to_string());
        return;
    };

    if !HASHTAG_RANGE.contains(&hashtags.len()) {
        violations.push(format!(
            "hashtags has {} entries, expected {} to {}",
            hashtags.len(),
            HASHTAG_RANGE.start(),
            HASHTAG_RANGE.end()
        ));
    }

    for (i, tag) in hashtags.iter().enumerate() {
        match tag.as_str() {
            Some(tag) if tag.chars().any(|c| c.is_uppercase() || c.is_whitespace()) => {
                violations.push(format!("hashtags[{i}] {tag:?} must be lowercase, no spaces"));
            }
            Some(_) => {}
            None => violations.push(format!("hashtags[{i}] is not a string")),
        }
    }
}

fn check_utms(payload: &Value, had_urls: bool, violations: &mut Vec<String>) {
    let Some(utms) = payload.get("utms").and_then(Value::as_array) else {
        violations.push("utms is missing or not an array".to_string());
        return;
    };

    if !had_urls && !utms.is_empty() {
        violations.push(format!(
            "utms has {} entries but no urls were supplied",
            utms.len()
        ));
    }
    if had_urls && utms.is_empty() {
        violations.push("utms is empty but urls were supplied".to_string());
    }
}
