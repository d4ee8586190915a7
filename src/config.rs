//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, response payloads, logging, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (Varnish,
// nginx, CDNs). The greeting never changes within a deploy, so it gets a long
// TTL; the health probe must always reflect the live process.

/// Greeting response - static content, safe to cache for an hour
pub const HTTP_CACHE_HELLO_MAX_AGE: u32 = 3600;

/// Pre-formatted Cache-Control header value (compile-time string concatenation)
pub const CACHE_CONTROL_HELLO: &str = formatcp!("public, max-age={}", HTTP_CACHE_HELLO_MAX_AGE);

/// Liveness probes must never see a cached response
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Response Payloads
// =============================================================================

/// Status value reported by the health probe
pub const HEALTH_STATUS: &str = "ok";

/// Greeting returned by the hello endpoint
pub const HELLO_MESSAGE: &str = "Hello, DevOps World!";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log format value selecting structured JSON output
pub const LOG_FORMAT_JSON: &str = "json";

/// Default listen address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the service starts with built-in
    /// defaults so it can run with no configuration at all.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&contents)?
        } else {
            AppConfig::default()
        };

        // Validate: log format must be one we know how to initialize
        if config.logging.format != DEFAULT_LOG_FORMAT && config.logging.format != LOG_FORMAT_JSON
        {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}'. Expected \"text\" or \"json\"",
                config.logging.format
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9090

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(file.path()).expect("load config");
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let file = write_config(
            r#"
            [http]
            port = 3000
            "#,
        );

        let config = AppConfig::load(file.path()).expect("load config");
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").expect("load defaults");
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[http\nport = oops");

        let err = AppConfig::load(file.path()).expect_err("should fail to parse");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let file = write_config(
            r#"
            [logging]
            format = "xml"
            "#,
        );

        let err = AppConfig::load(file.path()).expect_err("should fail validation");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn cache_control_values_are_well_formed() {
        assert_eq!(CACHE_CONTROL_HELLO, "public, max-age=3600");
        assert_eq!(CACHE_CONTROL_HEALTH, "no-store");
    }
}
