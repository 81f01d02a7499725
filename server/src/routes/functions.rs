//! Edge-function proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts assistant requests to `/functions/v1/{name}` on this
//! host. The handler forwards the JSON body to the configured functions
//! backend and attaches the server-held API key, so the key never ships in
//! the WASM bundle. Upstream status and JSON body are relayed unchanged.
//!
//! Only names in `ServerConfig::allowed_functions` are forwarded. The route
//! carries no CORS layer; the app calls it from its own origin.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Errors surfaced by the proxy. Each maps to a fixed status with a JSON
/// `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("functions backend not configured")]
    NotConfigured,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownFunction(_) => StatusCode::NOT_FOUND,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self, Self::Upstream(_)) {
            tracing::warn!(error = %self, "function proxy failed");
        } else {
            tracing::debug!(error = %self, "function proxy rejected request");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Function names are lowercase slugs: `[a-z0-9-]+`.
pub fn is_valid_function_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

pub fn upstream_url(base_url: &str, name: &str) -> String {
    format!("{}/{name}", base_url.trim_end_matches('/'))
}

/// `POST /functions/v1/{name}`: forward a JSON body to the functions backend.
pub async fn invoke_function(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    if !is_valid_function_name(&name) || !state.config.allows_function(&name) {
        return Err(ProxyError::UnknownFunction(name));
    }
    let functions = state.config.functions.as_ref().ok_or(ProxyError::NotConfigured)?;

    let mut request = state
        .http
        .post(upstream_url(&functions.base_url, &name))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body);
    if let Some(key) = &functions.api_key {
        request = request.bearer_auth(key).header("apikey", key);
    }

    let response = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ProxyError::Upstream(format!("invalid JSON from {name}: {e}")))?;

    tracing::debug!(function = %name, status = status.as_u16(), "function proxied");
    Ok((status, Json(payload)).into_response())
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod tests;
