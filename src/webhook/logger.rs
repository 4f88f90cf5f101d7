//! Injected logging sink for webhook execution.

use std::sync::Arc;

/// Tracing target for webhook execution entries.
pub const TRACING_TARGET: &str = "broker_webhook::webhook";

/// Receives the entries emitted around each webhook execution.
///
/// Passed into [`WebhookExecutor`](super::WebhookExecutor) rather than
/// reached through a global, so tests can capture exactly what was logged.
/// Messages handed to a logger never contain credentials in plaintext.
pub trait WebhookLogger: Send + Sync {
    /// Records an informational entry.
    fn info(&self, message: &str);

    /// Records an error entry.
    fn error(&self, message: &str);
}

/// Forwards entries to the `tracing` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl WebhookLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: TRACING_TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: TRACING_TARGET, "{message}");
    }
}

impl<L: WebhookLogger + ?Sized> WebhookLogger for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
