//! Pet assistant chat transcript and the one-request-at-a-time guard.
//!
//! DESIGN
//! ======
//! A send is split around the network call so the state can live in a
//! signal without being held across an `await`:
//!
//! 1. `begin_send` validates, appends the user message, clears the draft,
//!    raises `pending`, and returns the outbound payload. It returns `None`
//!    (and changes nothing) while a request is outstanding.
//! 2. The caller invokes the endpoint.
//! 3. `resolve` appends exactly one assistant message and lowers `pending`.
//!
//! The transcript is append-only; failures are appended as messages, never
//! substituted for earlier entries.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::assistant::AssistantError;
use crate::net::types::{ChatReply, ChatRequest, ChatRole, WireMessage};

/// Id of the synthetic greeting, which is never sent upstream.
pub const WELCOME_ID: &str = "welcome";

pub const WELCOME_TEXT: &str = "Hi there! 🐾 I'm your PawSquare pet assistant. Ask me anything about pet care, adoption, training, or finding local pet services!";

/// Used when the endpoint succeeds without reply text.
pub const EMPTY_REPLY_TEXT: &str = "Sorry, I couldn't process that. Please try again.";

/// Used for every endpoint failure.
pub const FAILURE_TEXT: &str = "Oops! Something went wrong. Please try again in a moment. 🐕";

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_ID
    }

    fn to_wire(&self) -> WireMessage {
        WireMessage { role: self.role, content: self.content.clone() }
    }
}

/// Chat widget state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub draft: String,
    next_seq: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: WELCOME_ID.to_owned(),
                role: ChatRole::Assistant,
                content: WELCOME_TEXT.to_owned(),
            }],
            pending: false,
            draft: String::new(),
            next_seq: 1,
        }
    }
}

impl ChatState {
    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Start a send of the current draft.
    pub fn submit_draft(&mut self) -> Option<ChatRequest> {
        let text = std::mem::take(&mut self.draft);
        let request = self.begin_send(&text);
        if request.is_none() {
            self.draft = text;
        }
        request
    }

    /// Accept `text` for sending and build the outbound payload.
    ///
    /// Returns `None` without touching state when `text` is blank or a
    /// request is already outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }

        self.push(ChatRole::User, text.to_owned());
        self.draft.clear();
        self.pending = true;

        let messages = self
            .messages
            .iter()
            .filter(|m| !m.is_welcome())
            .map(ChatMessage::to_wire)
            .collect();
        Some(ChatRequest { messages })
    }

    /// Append the assistant's answer for the outstanding request.
    ///
    /// Ignored when nothing is outstanding.
    pub fn resolve(&mut self, outcome: Result<ChatReply, AssistantError>) {
        if !self.pending {
            return;
        }
        let content = match outcome {
            Ok(reply) => reply.text().unwrap_or(EMPTY_REPLY_TEXT).to_owned(),
            Err(e) => {
                leptos::logging::warn!("chat request failed: {e}");
                FAILURE_TEXT.to_owned()
            }
        };
        self.push(ChatRole::Assistant, content);
        self.pending = false;
    }

    fn push(&mut self, role: ChatRole, content: String) {
        let id = format!("m{}", self.next_seq);
        self.next_seq += 1;
        self.messages.push(ChatMessage { id, role, content });
    }
}
