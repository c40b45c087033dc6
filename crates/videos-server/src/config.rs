//! Configuration management

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 4008;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default prefix for every API route.
pub const DEFAULT_BASE_PATH: &str = "/hometask_01/api";

/// Default CORS allowed origin; `*` allows any origin.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "*";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub cors: CorsConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// API surface configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix the feature routes are nested under
    pub base_path: String,
    /// Start with one sample video in the store
    pub seed_demo_data: bool,
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Config {
    /// Load configuration from `.env`, the environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration from any key lookup, falling back to defaults
    ///
    /// `PORT` takes precedence over `VIDEOS_PORT`. Unparseable numbers and
    /// flags fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: ServerConfig {
                host: lookup("VIDEOS_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
                port: parse_env(&lookup, "PORT")
                    .or_else(|| parse_env(&lookup, "VIDEOS_PORT"))
                    .unwrap_or(DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: parse_env(&lookup, "VIDEOS_SHUTDOWN_TIMEOUT")
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            },
            api: ApiConfig {
                base_path: lookup("VIDEOS_BASE_PATH").unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
                seed_demo_data: parse_env(&lookup, "VIDEOS_SEED_DEMO").unwrap_or(false),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: parse_env(&lookup, "CORS_ALLOW_CREDENTIALS").unwrap_or(false),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        let base = &self.api.base_path;
        if !base.starts_with('/') {
            anyhow::bail!("Base path '{}' must start with '/'", base);
        }
        if base.len() > 1 && base.ends_with('/') {
            anyhow::bail!("Base path '{}' must not end with '/'", base);
        }

        if self.cors.allow_credentials && self.cors.allows_any_origin() {
            anyhow::bail!("CORS credentials cannot be allowed together with a wildcard origin");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Look up `key` and parse it, treating unparseable values as unset
fn parse_env<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            api: ApiConfig {
                base_path: DEFAULT_BASE_PATH.to_string(),
                seed_demo_data: false,
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
                allow_credentials: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:4008");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("VIDEOS_HOST", "0.0.0.0"),
            ("VIDEOS_PORT", "9000"),
            ("VIDEOS_BASE_PATH", "/api"),
            ("VIDEOS_SEED_DEMO", "true"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test"),
            ("CORS_ALLOW_CREDENTIALS", "true"),
        ]));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.api.base_path, "/api");
        assert!(config.api.seed_demo_data);
        assert_eq!(config.cors.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_setting_parses_to_its_own_type() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("VIDEOS_SHUTDOWN_TIMEOUT", "90000"),
            ("VIDEOS_SEED_DEMO", "true"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test"),
            ("CORS_ALLOW_CREDENTIALS", " true "),
        ]));

        assert_eq!(config.server.port, 8080u16);
        assert_eq!(config.server.shutdown_timeout_secs, 90_000u64);
        assert!(config.api.seed_demo_data);
        assert!(config.cors.allow_credentials);
    }

    #[test]
    fn test_port_takes_precedence() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "5000"), ("VIDEOS_PORT", "9000")]));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("VIDEOS_PORT", "http"),
            ("VIDEOS_SEED_DEMO", "maybe"),
        ]));
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert!(!config.api.seed_demo_data);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_base_path_shape() {
        for bad in ["api", "/api/", ""] {
            let mut config = Config::default();
            config.api.base_path = bad.to_string();
            assert!(config.validate().is_err(), "{bad:?} should be rejected");
        }

        let mut config = Config::default();
        config.api.base_path = "/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_credentials_with_wildcard() {
        let mut config = Config::default();
        config.cors.allow_credentials = true;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_reads_environment() {
        std::env::set_var("VIDEOS_BASE_PATH", "/v1");
        let config = Config::load();
        std::env::remove_var("VIDEOS_BASE_PATH");

        assert_eq!(config.unwrap().api.base_path, "/v1");
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_environment() {
        std::env::set_var("VIDEOS_BASE_PATH", "no-slash");
        let result = Config::load();
        std::env::remove_var("VIDEOS_BASE_PATH");

        assert!(result.is_err());
    }
}
