//! Link extraction from message text

use regex::Regex;
use std::sync::OnceLock;

/// Trailing characters that end a sentence rather than a link
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

fn uri_regex() -> &'static Regex {
    static URI_REGEX: OnceLock<Regex> = OnceLock::new();
    URI_REGEX.get_or_init(|| Regex::new(r#"(?i)\bhttps?://[^\s<>"']+"#).unwrap())
}

/// Extract http(s) URIs from text, in order of appearance
///
/// Duplicates are kept; callers decide which link wins.
pub fn extract_uris(text: &str) -> Vec<String> {
    uri_regex()
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|uri| !uri.is_empty())
        .map(str::to_string)
        .collect()
}
