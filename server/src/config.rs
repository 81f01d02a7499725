//! Server configuration parsed from environment variables.
//!
//! `from_lookup` takes the variable source as a closure so tests can feed a
//! map instead of mutating the process environment.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FUNCTIONS_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ALLOWED_FUNCTIONS: &[&str] = &["pet-assistant"];

/// Errors produced while loading configuration or building shared clients.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Upstream edge-functions backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionsConfig {
    /// Base URL without a trailing slash; `{base_url}/{name}` is the target.
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` when `FUNCTIONS_BASE_URL` is unset; the proxy then answers 503.
    pub functions: Option<FunctionsConfig>,
    pub functions_timeout_secs: u64,
    /// Function names the proxy forwards; anything else is a 404.
    pub allowed_functions: Vec<String>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FUNCTIONS_BASE_URL`: proxy disabled when absent
    /// - `FUNCTIONS_API_KEY`: forwarded as bearer token and `apikey` header
    /// - `FUNCTIONS_TIMEOUT_SECS`: default 30, must be positive
    /// - `FUNCTIONS_ALLOWLIST`: comma-separated names, default `pet-assistant`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let functions_timeout_secs =
            parse_or("FUNCTIONS_TIMEOUT_SECS", lookup("FUNCTIONS_TIMEOUT_SECS"), DEFAULT_FUNCTIONS_TIMEOUT_SECS)?;
        if functions_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "FUNCTIONS_TIMEOUT_SECS", value: "0".into() });
        }

        let functions = non_empty(lookup("FUNCTIONS_BASE_URL")).map(|base| FunctionsConfig {
            base_url: base.trim_end_matches('/').to_owned(),
            api_key: non_empty(lookup("FUNCTIONS_API_KEY")),
        });

        let allowed_functions = match non_empty(lookup("FUNCTIONS_ALLOWLIST")) {
            None => DEFAULT_ALLOWED_FUNCTIONS.iter().map(|&name| name.to_owned()).collect(),
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
        };

        Ok(Self { port, functions, functions_timeout_secs, allowed_functions })
    }

    #[must_use]
    pub fn allows_function(&self, name: &str) -> bool {
        self.allowed_functions.iter().any(|allowed| allowed == name)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.functions_timeout_secs)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
