//! Environment-driven configuration.
//!
//! No config files and no CLI — a single API credential plus optional
//! overrides, all read from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

pub const APP_NAME: &str = "ClearHealth";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Required: the Gemini API credential.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Optional model override.
pub const ENV_MODEL: &str = "CLEARHEALTH_MODEL";
/// Optional listen address override.
pub const ENV_ADDR: &str = "CLEARHEALTH_ADDR";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "clearhealth=info"
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{ENV_API_KEY} is not set; the analysis API requires a credential")]
    MissingApiKey,

    #[error("invalid listen address {0:?}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup(ENV_MODEL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let addr = lookup(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;

        Ok(Self {
            api_key,
            model,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = AppConfig::from_lookup(env(&[(ENV_API_KEY, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_ADDR);
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = AppConfig::from_lookup(env(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);

        let err = AppConfig::from_lookup(env(&[(ENV_API_KEY, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn overrides_are_honored() {
        let config = AppConfig::from_lookup(env(&[
            (ENV_API_KEY, "secret"),
            (ENV_MODEL, "gemini-2.5-pro"),
            (ENV_ADDR, "0.0.0.0:9000"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn bad_address_is_an_error() {
        let err = AppConfig::from_lookup(env(&[
            (ENV_API_KEY, "secret"),
            (ENV_ADDR, "not-an-address"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr(_)));
    }

    #[test]
    fn app_name_and_version() {
        assert_eq!(APP_NAME, "ClearHealth");
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
