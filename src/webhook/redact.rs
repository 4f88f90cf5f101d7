//! Credential masking for anything that ends up in logs or reports.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed-length mask shown in place of any secret, whatever its length.
pub const MASK: &str = "**********";

static SENSITIVE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)authorization|token|secret|password|api[-_]?key|cookie")
        .expect("sensitive header pattern is valid")
});

/// Returns true if the value of a header with this name must not be logged.
#[must_use]
pub fn is_sensitive_header(name: &str) -> bool {
    SENSITIVE_HEADER.is_match(name)
}

/// Renders headers as `{name: value, ...}` with sensitive values masked.
///
/// Names are sorted so the output is stable regardless of insertion order.
#[must_use]
pub fn format_headers(headers: &http::HeaderMap) -> String {
    let mut entries: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            let shown = if value.is_sensitive() || is_sensitive_header(name.as_str()) {
                MASK.to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            format!("{name}: {shown}")
        })
        .collect();
    entries.sort();

    format!("{{{}}}", entries.join(", "))
}

/// Renders a URL with any userinfo password masked.
#[must_use]
pub fn redact_url(url: &url::Url) -> String {
    if url.password().is_none() {
        return url.to_string();
    }

    let mut redacted = url.clone();
    // Only fails for URLs that cannot carry credentials, which have no password
    let _ = redacted.set_password(Some(MASK));
    redacted.to_string()
}

/// Masks the userinfo password in URL text that may not parse.
///
/// Used for error messages, where the raw configured URL is all there is.
#[must_use]
pub fn redact_url_text(raw: &str) -> String {
    let Some(scheme_end) = raw.find("://") else {
        return raw.to_string();
    };
    let authority_start = scheme_end + 3;
    let authority_end = raw[authority_start..]
        .find(['/', '?', '#'])
        .map_or(raw.len(), |i| authority_start + i);
    let authority = &raw[authority_start..authority_end];

    let Some(at) = authority.rfind('@') else {
        return raw.to_string();
    };
    let Some(colon) = authority[..at].find(':') else {
        return raw.to_string();
    };

    format!(
        "{}{MASK}{}",
        &raw[..authority_start + colon + 1],
        &raw[authority_start + at..]
    )
}
