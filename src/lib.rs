//! broker-webhook: broker event webhook execution
//!
//! A library for executing one outbound webhook call: placeholder
//! substitution, basic authentication, HTTP/HTTPS dispatch, and
//! classification of the outcome into a structured result.

pub mod config;
pub mod webhook;
