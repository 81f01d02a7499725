//! Pet assistant function endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR) and native tests: the endpoint reports
//! `AssistantError::Unavailable`, since chat only runs in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure class (transport, non-2xx, undecodable body) is one
//! `AssistantError`. The chat state turns any of them into the same inline
//! transcript message, so the variants exist for logging only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::future::Future;

use super::types::{ChatReply, ChatRequest};

/// Default endpoint path, served by the SSR host's function proxy.
pub const DEFAULT_ASSISTANT_URL: &str = "/functions/v1/pet-assistant";

/// Errors produced while invoking the assistant endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    /// The request never produced a response.
    #[error("assistant request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("assistant responded with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("assistant response parse failed: {0}")]
    Decode(String),

    /// No HTTP stack is available in this build.
    #[error("assistant endpoint unavailable outside the browser")]
    Unavailable,
}

/// Something that can answer a chat request.
pub trait AssistantEndpoint {
    fn invoke(&self, request: &ChatRequest) -> impl Future<Output = Result<ChatReply, AssistantError>>;
}

/// HTTP function endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionEndpoint {
    pub url: String,
    pub api_key: Option<String>,
}

impl Default for FunctionEndpoint {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

impl FunctionEndpoint {
    /// Build from the `PAWSQUARE_ASSISTANT_URL` / `PAWSQUARE_ASSISTANT_KEY`
    /// values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_parts(option_env!("PAWSQUARE_ASSISTANT_URL"), option_env!("PAWSQUARE_ASSISTANT_KEY"))
    }

    /// Blank values fall back to the default URL and no key.
    pub fn from_parts(url: Option<&str>, api_key: Option<&str>) -> Self {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_ASSISTANT_URL)
            .to_owned();
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_owned);
        Self { url, api_key }
    }

    /// Extra headers carrying the API key, when one is configured.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        match &self.api_key {
            Some(key) => vec![("Authorization", format!("Bearer {key}")), ("apikey", key.clone())],
            None => Vec::new(),
        }
    }
}

impl AssistantEndpoint for FunctionEndpoint {
    async fn invoke(&self, request: &ChatRequest) -> Result<ChatReply, AssistantError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&self.url);
            for (name, value) in self.auth_headers() {
                builder = builder.header(name, &value);
            }
            let resp = builder
                .json(request)
                .map_err(|e| AssistantError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AssistantError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(AssistantError::Status(resp.status()));
            }
            resp.json::<ChatReply>()
                .await
                .map_err(|e| AssistantError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AssistantError::Unavailable)
        }
    }
}
