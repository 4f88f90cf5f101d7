//! Application execution logic.
//!
//! Builds the transport from validated config, executes the webhook once,
//! and renders the report.

use thiserror::Error;

use broker_webhook::config::ValidatedConfig;
use broker_webhook::webhook::{
    ConfigurationError, HttpClient, ReqwestClient, WebhookExecutionResult, WebhookExecutor,
    WebhookLogger,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The webhook could not be built for the given value.
    #[error("Invalid webhook configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Failed to serialize the execution report.
    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Executes the configured webhook once with the production client.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - The URL is invalid once the dynamic value is substituted
///
/// Delivery failures are not errors; they are reported in the result.
pub async fn execute(config: &ValidatedConfig) -> Result<WebhookExecutionResult, RunError> {
    let client = ReqwestClient::build(&config.transport).map_err(RunError::ClientBuild)?;
    let executor = WebhookExecutor::new(client);

    deliver(&executor, config).await
}

/// Executes the configured webhook with the given executor.
async fn deliver<H: HttpClient, L: WebhookLogger>(
    executor: &WebhookExecutor<H, L>,
    config: &ValidatedConfig,
) -> Result<WebhookExecutionResult, RunError> {
    tracing::debug!(
        "Executing {} with dynamic value of {} byte(s)",
        config.request.description(),
        config.dynamic_value.len()
    );

    let result = executor
        .execute(&config.request, &config.dynamic_value)
        .await?;

    Ok(result)
}

/// Renders the execution report as text or pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(result: &WebhookExecutionResult, json: bool) -> Result<String, RunError> {
    let report = result.report();

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(report.to_string())
}
