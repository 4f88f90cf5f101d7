//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [webhook]
            url = "https://example.com/hook"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.webhook.url.as_deref(), Some("https://example.com/hook"));
        assert!(config.webhook.headers.is_empty());
        assert!(config.transport.timeout.is_none());
    }

    #[test]
    fn parse_full_webhook_section() {
        let toml = r#"
            [webhook]
            url = "https://ci.example.com/build?pact=${DYNAMIC_VALUE}"
            method = "PUT"
            username = "ci"
            password = "secret"
            body = '{"pact": "${DYNAMIC_VALUE}"}'

            [webhook.headers]
            X-Custom-Header = "custom-value"
            Content-Type = "application/json"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let webhook = &config.webhook;

        assert_eq!(
            webhook.url.as_deref(),
            Some("https://ci.example.com/build?pact=${DYNAMIC_VALUE}")
        );
        assert_eq!(webhook.method.as_deref(), Some("PUT"));
        assert_eq!(webhook.username.as_deref(), Some("ci"));
        assert_eq!(webhook.password.as_deref(), Some("secret"));
        assert_eq!(webhook.body.as_deref(), Some(r#"{"pact": "${DYNAMIC_VALUE}"}"#));
        assert_eq!(webhook.headers.len(), 2);
        assert_eq!(
            webhook.headers.get("X-Custom-Header").map(String::as_str),
            Some("custom-value")
        );
    }

    #[test]
    fn parse_transport_section() {
        let toml = r"
            [transport]
            timeout = 5
            connect_timeout = 2
            system_proxy = false
        ";

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.transport.timeout, Some(5));
        assert_eq!(config.transport.connect_timeout, Some(2));
        assert_eq!(config.transport.system_proxy, Some(false));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.url.is_none());
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [webhook]
            url = "https://example.com"
            bearer = "token"
        "#;

        let result = TomlConfig::parse(toml);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[retry]\nmax_attempts = 3\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[transport]\ntimeout = \"soon\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://ci.example.com/build?pact=${DYNAMIC_VALUE}")
        );
    }

    #[test]
    fn default_template_mentions_placeholder() {
        assert!(default_config_template().contains("${DYNAMIC_VALUE}"));
    }
}
