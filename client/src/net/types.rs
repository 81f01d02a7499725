//! Wire types for the assistant function endpoint.
//!
//! The endpoint takes `{ "messages": [{ "role", "content" }, ...] }` and
//! answers with `{ "message": "..." }`. Extra fields in the reply are
//! ignored and a missing `message` deserializes to `None`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Speaker of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One history entry as sent to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Outbound payload: ordered history, newest user message last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<WireMessage>,
}

/// Endpoint reply body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatReply {
    /// Reply text when present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
