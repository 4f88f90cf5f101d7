//! Configuration layer for broker-webhook.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The URL is required and has no default.
//!
//! Headers are merged: TOML headers are applied first, then CLI headers
//! replace any TOML header with the same (case-insensitive) name.
//!
//! The password is only used when a username is resolved; it is taken from
//! the CLI if given there, otherwise from TOML.
//!
//! The dynamic value is CLI-only (`--value`), since it changes per event.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, TransportSection, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
