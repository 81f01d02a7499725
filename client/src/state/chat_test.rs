use std::cell::{Cell, RefCell};

use super::*;
use crate::net::assistant::AssistantEndpoint;

/// Endpoint that replays a fixed outcome and records every request.
struct ScriptedEndpoint {
    outcome: Result<ChatReply, AssistantError>,
    calls: Cell<usize>,
    seen: RefCell<Vec<ChatRequest>>,
}

impl ScriptedEndpoint {
    fn new(outcome: Result<ChatReply, AssistantError>) -> Self {
        Self { outcome, calls: Cell::new(0), seen: RefCell::new(Vec::new()) }
    }

    fn replying(text: &str) -> Self {
        Self::new(Ok(ChatReply { message: Some(text.to_owned()) }))
    }
}

impl AssistantEndpoint for ScriptedEndpoint {
    async fn invoke(&self, request: &ChatRequest) -> Result<ChatReply, AssistantError> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

/// Run one full send the way the widget does: begin, invoke, resolve.
fn round_trip(chat: &mut ChatState, endpoint: &ScriptedEndpoint, text: &str) -> bool {
    let Some(request) = chat.begin_send(text) else {
        return false;
    };
    let outcome = futures::executor::block_on(endpoint.invoke(&request));
    chat.resolve(outcome);
    true
}

fn last_two(chat: &ChatState) -> (&ChatMessage, &ChatMessage) {
    let n = chat.messages.len();
    (&chat.messages[n - 2], &chat.messages[n - 1])
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_transcript_holds_only_welcome() {
    let chat = ChatState::default();
    assert_eq!(chat.messages.len(), 1);
    assert!(chat.messages[0].is_welcome());
    assert_eq!(chat.messages[0].role, ChatRole::Assistant);
    assert_eq!(chat.messages[0].content, WELCOME_TEXT);
    assert!(!chat.pending);
    assert!(chat.draft.is_empty());
}

// =============================================================
// Successful round trip
// =============================================================

#[test]
fn hello_round_trip_appends_user_then_assistant() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("Hi! How is your pup?");

    assert!(round_trip(&mut chat, &ep, "Hello"));

    let (user, assistant) = last_two(&chat);
    assert_eq!(user.role, ChatRole::User);
    assert_eq!(user.content, "Hello");
    assert_eq!(assistant.role, ChatRole::Assistant);
    assert_eq!(assistant.content, "Hi! How is your pup?");
    assert!(!chat.pending);
    assert_eq!(ep.calls.get(), 1);
}

#[test]
fn text_is_trimmed_before_append() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("ok");
    round_trip(&mut chat, &ep, "  Is chocolate bad for dogs?  ");
    assert_eq!(chat.messages[1].content, "Is chocolate bad for dogs?");
}

#[test]
fn payload_excludes_welcome_and_ends_with_new_user_message() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("First answer");
    round_trip(&mut chat, &ep, "First");
    round_trip(&mut chat, &ep, "Second");

    let seen = ep.seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(
        seen[0].messages,
        vec![WireMessage { role: ChatRole::User, content: "First".to_owned() }]
    );
    assert_eq!(
        seen[1].messages,
        vec![
            WireMessage { role: ChatRole::User, content: "First".to_owned() },
            WireMessage { role: ChatRole::Assistant, content: "First answer".to_owned() },
            WireMessage { role: ChatRole::User, content: "Second".to_owned() },
        ]
    );
}

#[test]
fn message_ids_are_unique_and_increasing() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("ok");
    round_trip(&mut chat, &ep, "a");
    round_trip(&mut chat, &ep, "b");
    let ids: Vec<&str> = chat.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec![WELCOME_ID, "m1", "m2", "m3", "m4"]);
}

// =============================================================
// Fallbacks
// =============================================================

#[test]
fn empty_reply_uses_fallback_text() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("");
    round_trip(&mut chat, &ep, "test");
    assert_eq!(chat.messages.last().unwrap().content, EMPTY_REPLY_TEXT);
    assert_eq!(EMPTY_REPLY_TEXT, "Sorry, I couldn't process that. Please try again.");
}

#[test]
fn missing_reply_uses_fallback_text() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::new(Ok(ChatReply { message: None }));
    round_trip(&mut chat, &ep, "test");
    assert_eq!(chat.messages.last().unwrap().content, EMPTY_REPLY_TEXT);
    assert!(!chat.pending);
}

#[test]
fn endpoint_failure_appends_exactly_one_failure_message() {
    for err in [
        AssistantError::Transport("offline".to_owned()),
        AssistantError::Status(500),
        AssistantError::Decode("bad json".to_owned()),
    ] {
        let mut chat = ChatState::default();
        let ep = ScriptedEndpoint::new(Err(err));
        round_trip(&mut chat, &ep, "test");

        assert_eq!(chat.messages.len(), 3);
        let (user, assistant) = last_two(&chat);
        assert_eq!(user.content, "test");
        assert_eq!(assistant.role, ChatRole::Assistant);
        assert_eq!(assistant.content, FAILURE_TEXT);
        assert!(!chat.pending);
    }
}

#[test]
fn user_can_send_again_after_failure() {
    let mut chat = ChatState::default();
    let failing = ScriptedEndpoint::new(Err(AssistantError::Status(503)));
    round_trip(&mut chat, &failing, "first");

    let ok = ScriptedEndpoint::replying("back online");
    assert!(round_trip(&mut chat, &ok, "retry"));
    assert_eq!(chat.messages.last().unwrap().content, "back online");
}

// =============================================================
// Pending guard
// =============================================================

#[test]
fn second_send_while_pending_is_rejected() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("done");

    let first = chat.begin_send("one").unwrap();
    assert!(chat.pending);
    let len_after_first = chat.messages.len();

    assert!(chat.begin_send("two").is_none());
    assert!(!round_trip(&mut chat, &ep, "three"));
    assert_eq!(chat.messages.len(), len_after_first);
    assert_eq!(ep.calls.get(), 0);

    let outcome = futures::executor::block_on(ep.invoke(&first));
    chat.resolve(outcome);
    assert_eq!(ep.calls.get(), 1);
    assert!(!chat.pending);
    assert_eq!(chat.messages.len(), len_after_first + 1);
}

#[test]
fn blank_text_is_silently_ignored() {
    let mut chat = ChatState::default();
    let ep = ScriptedEndpoint::replying("never");
    assert!(!round_trip(&mut chat, &ep, "   "));
    assert!(!round_trip(&mut chat, &ep, ""));
    assert_eq!(chat.messages.len(), 1);
    assert!(!chat.pending);
    assert_eq!(ep.calls.get(), 0);
}

#[test]
fn resolve_without_pending_request_is_ignored() {
    let mut chat = ChatState::default();
    chat.resolve(Ok(ChatReply { message: Some("stray".to_owned()) }));
    assert_eq!(chat.messages.len(), 1);
}

// =============================================================
// Draft handling
// =============================================================

#[test]
fn submit_draft_clears_draft_on_accept() {
    let mut chat = ChatState { draft: "Need a groomer".to_owned(), ..ChatState::default() };
    assert!(chat.can_send());
    let req = chat.submit_draft().unwrap();
    assert!(chat.draft.is_empty());
    assert_eq!(req.messages.last().unwrap().content, "Need a groomer");
    assert!(!chat.can_send());
}

#[test]
fn submit_draft_keeps_draft_when_rejected() {
    let mut chat = ChatState::default();
    chat.begin_send("outstanding");
    chat.draft = "queued thought".to_owned();

    assert!(!chat.can_send());
    assert!(chat.submit_draft().is_none());
    assert_eq!(chat.draft, "queued thought");
}
