//! Placeholder substitution for webhook URLs and bodies.
//!
//! The only templating mechanism is literal replacement of [`PLACEHOLDER`].
//! Encoding rules depend on where the text ends up, see
//! [`SubstitutionContext`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The token replaced with the dynamic value at execute time.
pub const PLACEHOLDER: &str = "${DYNAMIC_VALUE}";

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Where the substituted text is going to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionContext {
    /// URL text: the value is percent-encoded as a URL component.
    Url,
    /// Body text: the value is inserted verbatim.
    Body,
}

/// Replaces every occurrence of `token` in `text` with `value`.
///
/// Text without the token is returned unchanged.
#[must_use]
pub fn substitute(text: &str, token: &str, value: &str, context: SubstitutionContext) -> String {
    if token.is_empty() || !text.contains(token) {
        return text.to_string();
    }

    match context {
        SubstitutionContext::Url => text.replace(token, &encode_component(value)),
        SubstitutionContext::Body => text.replace(token, value),
    }
}

/// Percent-encodes `value` keeping only RFC 3986 unreserved characters.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
