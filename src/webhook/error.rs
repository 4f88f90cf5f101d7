//! Error types for webhook configuration and transport.

use thiserror::Error;

/// Boxed originating error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A webhook definition that cannot be dispatched.
///
/// Detected before any network I/O. This is a defect in the caller's
/// configuration, not a delivery failure, so it is the only error
/// [`WebhookExecutor::execute`](super::WebhookExecutor::execute) returns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL, password masked
        url: String,
        /// Parser message
        reason: String,
    },

    /// The URL scheme is neither `http` nor `https`.
    #[error("Unsupported URL scheme '{scheme}' in '{url}': expected http or https")]
    UnsupportedScheme {
        /// The offending URL, password masked
        url: String,
        /// The scheme that was found
        scheme: String,
    },

    /// The URL has no host component.
    #[error("URL '{url}' has no host")]
    MissingHost {
        /// The offending URL, password masked
        url: String,
    },

    /// The HTTP method is not a valid token.
    #[error("Invalid HTTP method '{0}'")]
    InvalidMethod(String),

    /// The basic authentication header could not be encoded.
    #[error("Invalid basic auth credentials: {0}")]
    InvalidCredentials(String),
}

/// A round trip that could not complete.
///
/// Never returned to callers of the executor: it is captured inside a
/// failed [`WebhookExecutionResult`](super::WebhookExecutionResult).
#[derive(Debug, Error)]
pub enum TransportError {
    /// DNS resolution failed or the connection was refused or reset.
    #[error("Connection error: {0}")]
    Connection(#[source] BoxError),

    /// The TLS handshake failed.
    #[error("TLS error: {0}")]
    Tls(#[source] BoxError),

    /// The request did not complete within the configured deadline.
    #[error("Request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] BoxError),

    /// The transport rejected the request before sending it.
    #[error("Request error: {0}")]
    Request(#[source] BoxError),
}

impl TransportError {
    /// Short, stable name of the failure class, used in logs and reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Tls(_) => "tls",
            Self::Timeout(_) => "timeout",
            Self::Body(_) => "body",
            Self::Request(_) => "request",
        }
    }
}
