//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-request state: it holds one pooled `reqwest::Client`
//! for the function proxy and the immutable startup config.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{CONNECT_TIMEOUT_SECS, ConfigError, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build shared state, applying the configured upstream timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
