//! HTTP request/response types and client trait.

use super::TransportError;

/// A transport-ready HTTP request.
///
/// Produced by [`WebhookRequest::build`](super::WebhookRequest::build) after
/// placeholder substitution. It uses standard `http` crate types for method
/// and headers so any [`HttpClient`] implementation can send it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Returns true if the request must travel over TLS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// Returns the body as text for display, replacing invalid UTF-8.
    #[must_use]
    pub fn body_lossy(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

/// An HTTP response received from a server.
///
/// The single response descriptor for every status class. The body is
/// fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Returns the body as text for display, replacing invalid UTF-8.
    #[must_use]
    pub fn body_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for performing one HTTP round trip.
///
/// # Design
///
/// This trait abstracts the transport, enabling:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing the execution engine
///
/// Implementations must not panic on network failures: every failure is
/// reported as a [`TransportError`]. Redirects must not be followed; a 3xx is
/// a completed round trip.
///
/// # Example
///
/// ```ignore
/// use broker_webhook::webhook::{HttpClient, HttpRequest, HttpResponse, TransportError};
///
/// struct MockClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the round trip cannot complete:
    /// - Connection or DNS failure ([`TransportError::Connection`])
    /// - TLS handshake failure ([`TransportError::Tls`])
    /// - Deadline expiry ([`TransportError::Timeout`])
    /// - Response body read failure ([`TransportError::Body`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
