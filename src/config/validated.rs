//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

use crate::webhook::{TransportOptions, WebhookRequest};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The webhook to execute
    pub request: WebhookRequest,

    /// Value substituted for the placeholder
    pub dynamic_value: String,

    /// Transport deadlines and proxy behaviour
    pub transport: TransportOptions,

    /// Print the report as JSON
    pub json: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ webhook: {}, headers: {}, basic_auth: {}, body: {}, timeout: {}s, \
             connect_timeout: {}s, system_proxy: {} }}",
            self.request.description(),
            self.request.headers().len(),
            self.request.credentials().is_some(),
            self.request.body().is_some(),
            self.transport.timeout.as_secs(),
            self.transport.connect_timeout.as_secs(),
            self.transport.use_system_proxy,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing or invalid
    /// - The method is invalid
    /// - Header format is invalid
    /// - Duration values are zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let request = Self::build_request(cli, toml)?;
        let transport = Self::build_transport(cli, toml)?;

        let dynamic_value = cli
            .value
            .clone()
            .unwrap_or_else(|| defaults::DYNAMIC_VALUE.to_string());

        Ok(Self {
            request,
            dynamic_value,
            transport,
            json: cli.json,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn build_request(cli: &Cli, toml: Option<&TomlConfig>) -> Result<WebhookRequest, ConfigError> {
        let webhook = toml.map(|t| &t.webhook);

        let url = cli
            .url
            .as_deref()
            .or_else(|| webhook.and_then(|w| w.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        // Priority: CLI explicit > TOML > default
        let method = cli
            .method
            .as_deref()
            .or_else(|| webhook.and_then(|w| w.method.as_deref()))
            .unwrap_or(defaults::METHOD);

        let mut request =
            WebhookRequest::new(method, url)?.with_headers(Self::resolve_headers(cli, toml)?);

        let username = cli
            .username
            .clone()
            .or_else(|| webhook.and_then(|w| w.username.clone()));
        if let Some(username) = username {
            let password = cli
                .password
                .clone()
                .or_else(|| webhook.and_then(|w| w.password.clone()));
            request = request.with_basic_auth(username, password);
        }

        let body = cli
            .body
            .clone()
            .or_else(|| webhook.and_then(|w| w.body.clone()));
        if let Some(body) = body {
            request = request.with_body(body);
        }

        Ok(request)
    }

    fn resolve_headers(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        // Add TOML headers first (CLI can override)
        if let Some(toml) = toml {
            for (name, value) in &toml.webhook.headers {
                let header_name = parse_header_name(name)?;
                let header_value = parse_header_value(name, value)?;
                headers.insert(header_name, header_value);
            }
        }

        // Add CLI headers (override TOML)
        for header_str in &cli.headers {
            let (name, value) = parse_header_string(header_str)?;
            let header_name = parse_header_name(&name)?;
            let header_value = parse_header_value(&name, &value)?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    fn build_transport(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<TransportOptions, ConfigError> {
        let transport = toml.map(|t| &t.transport);

        let timeout = resolve_duration(
            "timeout",
            cli.timeout
                .or_else(|| transport.and_then(|t| t.timeout))
                .unwrap_or(defaults::TIMEOUT_SECS),
        )?;

        let connect_timeout = resolve_duration(
            "connect_timeout",
            cli.connect_timeout
                .or_else(|| transport.and_then(|t| t.connect_timeout))
                .unwrap_or(defaults::CONNECT_TIMEOUT_SECS),
        )?;

        // --no-proxy only disables; it cannot re-enable a TOML opt-out
        let system_proxy =
            !cli.no_proxy && transport.and_then(|t| t.system_proxy).unwrap_or(true);

        Ok(TransportOptions::new()
            .with_timeout(timeout)
            .with_connect_timeout(connect_timeout)
            .with_system_proxy(system_proxy))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn resolve_duration(field: &'static str, seconds: u64) -> Result<Duration, ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // "Key=Value" or "Key: Value"; the first separator wins so values may contain either
    let Some(index) = s.find(['=', ':']) else {
        return Err(ConfigError::InvalidHeader {
            value: s.to_string(),
        });
    };

    let (name, value) = (&s[..index], &s[index + 1..]);
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
