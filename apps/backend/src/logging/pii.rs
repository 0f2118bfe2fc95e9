use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

// JWTs: three base64url segments separated by dots.
static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
});

/// Masks emails (first character of the local part kept) and bearer tokens.
///
/// Tokens are masked first so that the dots inside a JWT are never
/// mistaken for an email domain.
pub fn redact(input: &str) -> String {
    let without_tokens = JWT_REGEX.replace_all(input, "[REDACTED_TOKEN]");

    EMAIL_REGEX
        .replace_all(&without_tokens, |caps: &Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) => match local.chars().next() {
                    Some(first) => format!("{first}***@{domain}"),
                    None => format!("@{domain}"),
                },
                None => full.to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that redacts on format, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
