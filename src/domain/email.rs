use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Collects every non-overlapping email-like substring of `text`, left to right.
///
/// Duplicates are kept and nothing is validated beyond the pattern.
pub fn extract_emails(text: &str) -> Vec<String> {
    let emails: Vec<String> = EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    log::debug!("Found {} email matches in {} bytes", emails.len(), text.len());

    emails
}
