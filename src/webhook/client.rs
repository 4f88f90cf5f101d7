//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpRequest, HttpResponse, TransportError};

/// Deadlines and proxy behaviour for the production client.
///
/// Timeouts are the only cancellation mechanism: an expired deadline is
/// reported as [`TransportError::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOptions {
    /// Deadline for the whole round trip, including reading the body.
    pub timeout: Duration,
    /// Deadline for establishing the TCP (and TLS) connection.
    pub connect_timeout: Duration,
    /// Whether `HTTP_PROXY`/`HTTPS_PROXY` style settings are honoured.
    pub use_system_proxy: bool,
}

impl TransportOptions {
    /// Default request timeout (30 seconds).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connect timeout (10 seconds).
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates options with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            use_system_proxy: true,
        }
    }

    /// Sets the round-trip timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enables or disables system proxy settings.
    #[must_use]
    pub const fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// TLS is provided by rustls with certificate validation against the
/// bundled and platform trust roots; there is no switch to disable it.
/// Redirects are never followed so a 3xx reaches the classifier unchanged.
///
/// # Example
///
/// ```no_run
/// use broker_webhook::webhook::{HttpClient, HttpRequest, ReqwestClient, TransportOptions};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::build(&TransportOptions::default())?;
/// let url = Url::parse("https://ci.example.com/hook")?;
/// let request = HttpRequest::new(http::Method::POST, url).with_body(b"hello".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default [`TransportOptions`].
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, like
    /// `reqwest::Client::new`. Use [`ReqwestClient::build`] to handle that case.
    #[must_use]
    pub fn new() -> Self {
        Self::build(&TransportOptions::default()).expect("TLS backend cannot be initialized")
    }

    /// Creates an HTTP client with the given options.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend or resolver cannot be
    /// initialized.
    pub fn build(options: &TransportOptions) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .redirect(reqwest::redirect::Policy::none());

        if !options.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// The caller is responsible for disabling redirects on `client`.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify_send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout(Box::new(e))
                } else {
                    TransportError::Body(Box::new(e))
                }
            })?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn classify_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(Box::new(e))
    } else if e.is_builder() {
        TransportError::Request(Box::new(e))
    } else if is_tls_failure(&e) {
        TransportError::Tls(Box::new(e))
    } else {
        TransportError::Connection(Box::new(e))
    }
}

/// Walks the source chain looking for a handshake failure.
///
/// rustls surfaces handshake and certificate problems through hyper as
/// `io::ErrorKind::InvalidData`; the message check covers connectors that
/// wrap them differently.
fn is_tls_failure(e: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(e);

    while let Some(cause) = source {
        let invalid_data = cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::InvalidData);
        if invalid_data {
            return true;
        }

        let message = cause.to_string().to_ascii_lowercase();
        if message.contains("certificate") || message.contains("tls") {
            return true;
        }

        source = cause.source();
    }

    false
}
