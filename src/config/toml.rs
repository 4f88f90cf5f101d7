//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook definition section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Transport configuration section
    #[serde(default)]
    pub transport: TransportSection,
}

/// Webhook definition section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL; may contain the placeholder
    pub url: Option<String>,

    /// HTTP method (default: POST)
    pub method: Option<String>,

    /// HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Username for basic authentication
    pub username: Option<String>,

    /// Password for basic authentication
    pub password: Option<String>,

    /// Request body; may contain the placeholder
    pub body: Option<String>,
}

/// Transport configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Honour HTTP_PROXY/HTTPS_PROXY settings (default: true)
    pub system_proxy: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# broker-webhook configuration file
#
# ${DYNAMIC_VALUE} in url and body is replaced with the --value argument.
# In the url it is percent-encoded, in the body it is inserted as-is.

[webhook]
# Webhook URL (required)
url = "https://ci.example.com/build?pact=${DYNAMIC_VALUE}"

# HTTP method (default: POST, can be overridden by --method CLI flag)
# method = "POST"

# Basic authentication (sent when username is set)
# username = "ci"
# password = "secret"

# Request body (omit to send no body)
# body = '{"pact_url": "${DYNAMIC_VALUE}"}'

# HTTP headers
# [webhook.headers]
# Content-Type = "application/json"

[transport]
# Request timeout in seconds (default: 30)
# timeout = 30

# Connect timeout in seconds (default: 10)
# connect_timeout = 10

# Honour HTTP_PROXY/HTTPS_PROXY environment variables (default: true)
# system_proxy = true
"#
    .to_string()
}
