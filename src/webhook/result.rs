//! Outcome classification for one webhook execution.

use serde::Serialize;

use super::{HttpResponse, TransportError};

/// Lowest status code that marks a delivery as failed.
///
/// Everything below it, including redirects and client errors, means the
/// endpoint was reached and answered.
pub const FAILURE_STATUS_THRESHOLD: u16 = 500;

/// The outcome of one webhook execution.
///
/// Exactly one of a response or a transport error is carried, never both
/// and never neither. Use [`is_success`](Self::is_success),
/// [`response`](Self::response) and [`error`](Self::error) to inspect it.
#[derive(Debug)]
pub enum WebhookExecutionResult {
    /// The endpoint answered with a status below 500.
    Success {
        /// The response received
        response: HttpResponse,
    },
    /// The endpoint answered with a status of 500 or above.
    ServerError {
        /// The response received
        response: HttpResponse,
    },
    /// No response was obtained.
    TransportFailure {
        /// The originating transport failure
        error: TransportError,
    },
}

impl WebhookExecutionResult {
    /// Classifies a transport outcome. This is the only place the success
    /// boundary is decided.
    #[must_use]
    pub fn classify(outcome: Result<HttpResponse, TransportError>) -> Self {
        match outcome {
            Ok(response) if response.status.as_u16() < FAILURE_STATUS_THRESHOLD => {
                Self::Success { response }
            }
            Ok(response) => Self::ServerError { response },
            Err(error) => Self::TransportFailure { error },
        }
    }

    /// Returns true if the webhook counts as delivered.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the response, present whenever the round trip completed.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Success { response } | Self::ServerError { response } => Some(response),
            Self::TransportFailure { .. } => None,
        }
    }

    /// Returns the transport failure, present only when no response was obtained.
    #[must_use]
    pub const fn error(&self) -> Option<&TransportError> {
        match self {
            Self::TransportFailure { error } => Some(error),
            Self::Success { .. } | Self::ServerError { .. } => None,
        }
    }

    /// Builds a serializable summary for audit records and CLI output.
    #[must_use]
    pub fn report(&self) -> ExecutionReport {
        let response = self.response();
        let error = self.error();

        ExecutionReport {
            success: self.is_success(),
            status: response.map(|r| r.status.as_u16()),
            body: response.map(HttpResponse::body_lossy),
            error_kind: error.map(TransportError::kind),
            error_message: error.map(ToString::to_string),
        }
    }
}

/// Serializable snapshot of a [`WebhookExecutionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    /// Whether the webhook counts as delivered
    pub success: bool,
    /// Response status code, if a response was obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response body, if a response was obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Failure class, if no response was obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    /// Failure message, if no response was obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl std::fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcome = if self.success { "delivered" } else { "failed" };

        match (self.status, &self.error_message) {
            (Some(status), _) => write!(f, "Webhook {outcome}: status {status}"),
            (None, Some(message)) => write!(
                f,
                "Webhook {outcome}: {} ({message})",
                self.error_kind.unwrap_or("transport")
            ),
            (None, None) => write!(f, "Webhook {outcome}"),
        }
    }
}
