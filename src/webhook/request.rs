//! Webhook definition and transport request construction.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use super::redact::{MASK, redact_url_text};
use super::template::{PLACEHOLDER, SubstitutionContext, substitute};
use super::{ConfigurationError, HttpRequest};

/// Stand-in for the dynamic value when validating a URL template.
const SAMPLE_VALUE: &str = "sample";

/// Basic authentication credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: Option<String>,
}

impl Credentials {
    /// Creates credentials; a missing password is sent as empty.
    #[must_use]
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns true if a password was configured (even an empty one).
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Computes the `Authorization: Basic ...` header value.
    ///
    /// The value is marked sensitive so it is never rendered in logs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidCredentials`] if the encoded value
    /// is not a valid header value.
    pub fn header_value(&self) -> Result<HeaderValue, ConfigurationError> {
        let password = self.password.as_deref().unwrap_or_default();
        let encoded = STANDARD.encode(format!("{}:{password}", self.username));

        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| ConfigurationError::InvalidCredentials(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| MASK))
            .finish()
    }
}

/// A stored webhook definition, ready to be executed.
///
/// Immutable once built. The URL and body may contain [`PLACEHOLDER`],
/// which is replaced on every [`build`](Self::build).
///
/// # Example
///
/// ```
/// use broker_webhook::webhook::WebhookRequest;
///
/// let webhook = WebhookRequest::new("post", "http://example.org/hook?v=${DYNAMIC_VALUE}")
///     .unwrap()
///     .with_basic_auth("ci", Some("password".to_string()))
///     .with_body(r#"{"pact": "${DYNAMIC_VALUE}"}"#);
///
/// assert_eq!(webhook.description(), "POST example.org");
/// assert_eq!(webhook.display_password(), Some("**********"));
/// ```
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    method: Method,
    url: String,
    host: String,
    headers: HeaderMap,
    credentials: Option<Credentials>,
    body: Option<String>,
}

impl WebhookRequest {
    /// Creates a webhook definition with no headers, credentials or body.
    ///
    /// The method is matched case-insensitively and stored uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the method is not a valid token, or
    /// the URL (with the placeholder filled in) is not an absolute `http` or
    /// `https` URL with a host.
    pub fn new(method: &str, url: impl Into<String>) -> Result<Self, ConfigurationError> {
        let method = parse_method(method)?;
        let url = url.into();
        let validated = parse_url(&substitute(
            &url,
            PLACEHOLDER,
            SAMPLE_VALUE,
            SubstitutionContext::Url,
        ))?;
        let host = validated.host_str().unwrap_or_default().to_string();

        Ok(Self {
            method,
            url,
            host,
            headers: HeaderMap::new(),
            credentials: None,
            body: None,
        })
    }

    /// Replaces the configured headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a header, keeping existing values for the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Enables basic authentication.
    ///
    /// A `None` password is sent as an empty string.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Sets the body text. It may contain the placeholder.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the uppercased HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the URL template as configured.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the host component of the configured URL.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the configured headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the basic auth credentials, if any.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the configured username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::username)
    }

    /// Returns the body template, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns `"<METHOD> <host>"` for concise logging.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} {}", self.method, self.host)
    }

    /// Returns the password mask when a password is configured.
    ///
    /// The mask has a fixed length and never reveals the real password.
    #[must_use]
    pub fn display_password(&self) -> Option<&'static str> {
        self.credentials
            .as_ref()
            .filter(|c| c.has_password())
            .map(|_| MASK)
    }

    /// Builds the transport request for one delivery attempt.
    ///
    /// Substitutes `dynamic_value` into the URL (percent-encoded) and the
    /// body (verbatim), copies the configured headers and adds basic auth
    /// when a username is set. Configured headers are never altered otherwise;
    /// in particular no `Content-Type` is inferred.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the substituted URL is invalid.
    pub fn build(&self, dynamic_value: &str) -> Result<HttpRequest, ConfigurationError> {
        let url = parse_url(&substitute(
            &self.url,
            PLACEHOLDER,
            dynamic_value,
            SubstitutionContext::Url,
        ))?;

        let mut request = HttpRequest::new(self.method.clone(), url);

        for (name, value) in &self.headers {
            request.headers.append(name, value.clone());
        }

        if let Some(credentials) = &self.credentials {
            request
                .headers
                .insert(AUTHORIZATION, credentials.header_value()?);
        }

        if let Some(body) = &self.body {
            let rendered = substitute(body, PLACEHOLDER, dynamic_value, SubstitutionContext::Body);
            request.body = Some(rendered.into_bytes());
        }

        Ok(request)
    }
}

fn parse_method(method: &str) -> Result<Method, ConfigurationError> {
    Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
        .map_err(|_| ConfigurationError::InvalidMethod(method.to_string()))
}

fn parse_url(raw: &str) -> Result<Url, ConfigurationError> {
    let url = Url::parse(raw).map_err(|e| ConfigurationError::InvalidUrl {
        url: redact_url_text(raw),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigurationError::UnsupportedScheme {
            url: redact_url_text(raw),
            scheme: url.scheme().to_string(),
        });
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigurationError::MissingHost {
            url: redact_url_text(raw),
        });
    }

    Ok(url)
}
