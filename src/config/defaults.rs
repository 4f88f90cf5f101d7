//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default HTTP method for webhook requests.
pub const METHOD: &str = "POST";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default dynamic value when none is given on the command line.
pub const DYNAMIC_VALUE: &str = "";
