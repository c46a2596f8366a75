//! Raw server text → short message fit for an end user.

use once_cell::sync::Lazy;
use regex::Regex;

pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Service unavailable. Please check that the server is running and try again.";
pub const SERVER_PROBLEM_MESSAGE: &str =
    "Something went wrong on the server. Please try again later.";
pub const CONNECTION_FAILED_MESSAGE: &str = "Connection failed. Check your network and try again.";
pub const TIMEOUT_MESSAGE: &str = "The request took too long. Please try again.";

const MAX_MESSAGE_CHARS: usize = 120;
const TRUNCATED_CHARS: usize = 117;

static RE_HTML: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*<|<html|<!DOCTYPE").expect("html regex"));
static RE_PRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").expect("pre regex"));
static RE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").expect("tag regex"));

/// Never returns HTML. Blank input and HTML without a `<pre>` block yield
/// `fallback`; inline tags in plain text are stripped.
pub fn sanitize_message(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    let text = if RE_HTML.is_match(trimmed) {
        match pre_text(trimmed) {
            Some(pre) => pre,
            None => return fallback.to_string(),
        }
    } else {
        trimmed
    };

    let plain = RE_TAG.replace_all(text, "");
    let plain = plain.trim();
    if plain.is_empty() {
        return fallback.to_string();
    }
    friendly_message(plain)
}

fn pre_text(html: &str) -> Option<&str> {
    RE_PRE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

fn friendly_message(text: &str) -> String {
    let lower = text.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if mentions(&["cannot post", "404", "not found"]) {
        return SERVICE_UNAVAILABLE_MESSAGE.to_string();
    }
    if mentions(&["500", "internal server error"]) {
        return SERVER_PROBLEM_MESSAGE.to_string();
    }
    if mentions(&["network", "failed to fetch", "connection"]) {
        return CONNECTION_FAILED_MESSAGE.to_string();
    }
    if mentions(&["timeout", "timed out"]) {
        return TIMEOUT_MESSAGE.to_string();
    }

    if text.chars().count() <= MAX_MESSAGE_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(TRUNCATED_CHARS).collect();
    short.push('…');
    short
}
