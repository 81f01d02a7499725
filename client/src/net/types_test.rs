use super::*;

// =============================================================
// ChatRequest serialization
// =============================================================

#[test]
fn request_serializes_roles_lowercase() {
    let req = ChatRequest {
        messages: vec![
            WireMessage { role: ChatRole::User, content: "Hi".to_owned() },
            WireMessage { role: ChatRole::Assistant, content: "Hello!".to_owned() },
        ],
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "messages": [
                { "role": "user", "content": "Hi" },
                { "role": "assistant", "content": "Hello!" }
            ]
        })
    );
}

// =============================================================
// ChatReply parsing
// =============================================================

#[test]
fn reply_with_message_exposes_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":"Walk twice a day."}"#).unwrap();
    assert_eq!(reply.text(), Some("Walk twice a day."));
}

#[test]
fn reply_missing_message_has_no_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"other":1}"#).unwrap();
    assert_eq!(reply.message, None);
    assert_eq!(reply.text(), None);
}

#[test]
fn reply_empty_message_has_no_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":""}"#).unwrap();
    assert_eq!(reply.text(), None);
}

#[test]
fn reply_null_message_has_no_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":null}"#).unwrap();
    assert_eq!(reply.text(), None);
}
