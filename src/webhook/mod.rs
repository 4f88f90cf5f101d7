//! Webhook layer: executes one outbound webhook call and classifies it.
//!
//! This module provides types and traits for:
//! - Describing a stored webhook ([`WebhookRequest`])
//! - Placeholder substitution ([`substitute`], [`PLACEHOLDER`])
//! - Building and sending HTTP requests ([`HttpRequest`], [`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Outcome classification ([`WebhookExecutionResult`])
//! - Injected logging ([`WebhookLogger`], [`TracingLogger`])
//! - The execution engine tying them together ([`WebhookExecutor`])

mod client;
mod error;
mod executor;
mod http;
mod logger;
pub mod redact;
mod request;
mod result;
mod template;

#[cfg(test)]
mod executor_tests;
#[cfg(test)]
mod http_tests;

pub use client::{ReqwestClient, TransportOptions};
pub use error::{BoxError, ConfigurationError, TransportError};
pub use executor::WebhookExecutor;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use logger::{TRACING_TARGET, TracingLogger, WebhookLogger};
pub use request::{Credentials, WebhookRequest};
pub use result::{ExecutionReport, FAILURE_STATUS_THRESHOLD, WebhookExecutionResult};
pub use template::{PLACEHOLDER, SubstitutionContext, encode_component, substitute};
