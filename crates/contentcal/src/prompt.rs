//! Prompt rendering for the chat-completion backend.

use chrono::{Datelike, NaiveDate};

use crate::request::CalendarRequest;

/// Fixed system instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a senior B2B content strategist. \
     Respond with a single JSON object and nothing else.";

/// Campaign month token: year and month of `today`, digits only (`YYYYMM`).
pub fn campaign_month(today: NaiveDate) -> String {
    format!("{:04}{:02}", today.year(), today.month())
}

/// Campaign slug: brand lowercased with every non-alphanumeric run collapsed
/// to a single hyphen, trimmed at both ends.
pub fn campaign_slug(brand: &str) -> String {
    let mut slug = String::with_capacity(brand.len());
    let mut pending_hyphen = false;

    for c in brand.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Render the user instruction for a validated request. `today` anchors the
/// campaign month and the fallback start date.
pub fn render_user_prompt(request: &CalendarRequest, today: NaiveDate) -> String {
    let start_date = request
        .start_date
        .clone()
        .unwrap_or_else(|| today.to_string());
    let key_dates = serde_json::to_string(&request.key_dates).unwrap_or_default();
    let urls = serde_json::to_string(&request.urls).unwrap_or_default();

    format!(
        "Create a 30-day social content calendar and 5 LinkedIn posts.\n\
         \n\
         Brand: {brand}\n\
         Audience: {audience}\n\
         Tone: {tone}\n\
         Start date: {start_date}\n\
         Key dates: {key_dates}\n\
         Reference URLs: {urls}\n\
         Campaign month: {month}\n\
         Campaign slug: {slug}\n\
         \n\
         Return a single JSON object with keys \"calendar\" (exactly 30 entries, \
         each with date, theme, title, hook, cta), \"linkedin_posts\" (exactly 5 \
         entries, each with text), \"hashtags\" (3-8 lowercase tags), and \
         \"utms\" (one entry per platform when reference URLs are given, \
         otherwise an empty array).",
        brand = request.brand,
        audience = request.audience,
        tone = request.tone,
        month = campaign_month(today),
        slug = campaign_slug(&request.brand),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> CalendarRequest {
        CalendarRequest::from_args(&json!({
            "brand": "Acme & Co.",
            "audience": "CTOs",
            "key_dates": ["2025-10-15 Launch"],
            "urls": ["https://acme.test"]
        }))
        .unwrap()
    }

    #[test]
    fn test_campaign_month_digits_only() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        assert_eq!(campaign_month(date), "202510");
    }

    #[test]
    fn test_campaign_slug_collapses_runs() {
        assert_eq!(campaign_slug("Acme & Co."), "acme-co");
        assert_eq!(campaign_slug("  Röd  Bränd  "), "röd-bränd");
        assert_eq!(campaign_slug("plain"), "plain");
    }

    #[test]
    fn test_render_embeds_every_token() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        let prompt = render_user_prompt(&request(), today);
        assert!(prompt.contains("Brand: Acme & Co."));
        assert!(prompt.contains("Audience: CTOs"));
        assert!(prompt.contains(&format!("Tone: {}", crate::request::DEFAULT_TONE)));
        assert!(prompt.contains("Start date: 2025-10-03"));
        assert!(prompt.contains(r#"Key dates: ["2025-10-15 Launch"]"#));
        assert!(prompt.contains(r#"Reference URLs: ["https://acme.test"]"#));
        assert!(prompt.contains("Campaign month: 202510"));
        assert!(prompt.contains("Campaign slug: acme-co"));
    }

    #[test]
    fn test_render_prefers_explicit_start_date() {
        let mut req = request();
        req.start_date = Some("2025-11-01".to_string());
        let today = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        let prompt = render_user_prompt(&req, today);
        assert!(prompt.contains("Start date: 2025-11-01"));
    }
}
