//! Webhook execution engine.

use super::redact::{format_headers, redact_url};
use super::{
    ConfigurationError, HttpClient, HttpRequest, TracingLogger, WebhookExecutionResult,
    WebhookLogger, WebhookRequest,
};

/// Executes webhook definitions, one round trip per call.
///
/// Holds no mutable state, so a single executor can serve concurrent
/// executions of different webhooks. Retries and scheduling belong to the
/// caller.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `L`: The logger receiving request and outcome entries (defaults to [`TracingLogger`])
///
/// # Example
///
/// ```no_run
/// use broker_webhook::webhook::{ReqwestClient, WebhookExecutor, WebhookRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let executor = WebhookExecutor::new(ReqwestClient::new());
/// let webhook = WebhookRequest::new("POST", "https://ci.example.com/build?pact=${DYNAMIC_VALUE}")?;
///
/// let result = executor.execute(&webhook, "https://broker/pacts/1").await?;
/// println!("delivered: {}", result.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookExecutor<H, L = TracingLogger> {
    client: H,
    logger: L,
}

impl<H> WebhookExecutor<H, TracingLogger> {
    /// Creates an executor that logs through `tracing`.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            client,
            logger: TracingLogger,
        }
    }
}

impl<H, L> WebhookExecutor<H, L> {
    /// Replaces the logger.
    #[must_use]
    pub fn with_logger<L2>(self, logger: L2) -> WebhookExecutor<H, L2> {
        WebhookExecutor {
            client: self.client,
            logger,
        }
    }

    /// Returns the HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the logger.
    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }
}

impl<H: HttpClient, L: WebhookLogger> WebhookExecutor<H, L> {
    /// Executes `webhook` once with `dynamic_value` substituted.
    ///
    /// Every transport outcome, including connection failures and
    /// timeouts, is returned as a [`WebhookExecutionResult`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] only if the request cannot be built,
    /// in which case nothing was sent and nothing was logged.
    pub async fn execute(
        &self,
        webhook: &WebhookRequest,
        dynamic_value: &str,
    ) -> Result<WebhookExecutionResult, ConfigurationError> {
        let request = webhook.build(dynamic_value)?;
        let description = webhook.description();

        self.log_request(&description, &request);

        let outcome = self.client.request(request).await;
        let result = WebhookExecutionResult::classify(outcome);

        self.log_result(&description, &result);

        Ok(result)
    }

    fn log_request(&self, description: &str, request: &HttpRequest) {
        let body = request.body_lossy().unwrap_or_else(|| "none".to_string());

        self.logger.info(&format!(
            "Making webhook request {description} url={} headers={} body={body}",
            redact_url(&request.url),
            format_headers(&request.headers),
        ));
    }

    fn log_result(&self, description: &str, result: &WebhookExecutionResult) {
        if let Some(response) = result.response() {
            self.logger.info(&format!(
                "Received response for webhook {description} status={} body={}",
                response.status.as_u16(),
                response.body_lossy(),
            ));
        } else if let Some(error) = result.error() {
            self.logger.error(&format!(
                "Error executing webhook {description}: {} - {error}",
                error.kind(),
            ));
        }
    }
}
