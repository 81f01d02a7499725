use super::*;

// =============================================================
// Endpoint configuration
// =============================================================

#[test]
fn default_endpoint_uses_proxy_path_without_key() {
    let ep = FunctionEndpoint::default();
    assert_eq!(ep.url, DEFAULT_ASSISTANT_URL);
    assert_eq!(ep.api_key, None);
    assert!(ep.auth_headers().is_empty());
}

#[test]
fn from_parts_trims_and_keeps_overrides() {
    let ep = FunctionEndpoint::from_parts(Some("  https://fn.example.test/pet-assistant "), Some(" anon-key "));
    assert_eq!(ep.url, "https://fn.example.test/pet-assistant");
    assert_eq!(ep.api_key.as_deref(), Some("anon-key"));
}

#[test]
fn from_parts_blank_values_fall_back() {
    let ep = FunctionEndpoint::from_parts(Some("   "), Some(""));
    assert_eq!(ep.url, DEFAULT_ASSISTANT_URL);
    assert_eq!(ep.api_key, None);
}

#[test]
fn auth_headers_carry_bearer_and_apikey() {
    let ep = FunctionEndpoint::from_parts(None, Some("k1"));
    assert_eq!(
        ep.auth_headers(),
        vec![("Authorization", "Bearer k1".to_owned()), ("apikey", "k1".to_owned())]
    );
}

// =============================================================
// Native builds
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn invoke_without_browser_reports_unavailable() {
    let ep = FunctionEndpoint::default();
    let result = futures::executor::block_on(ep.invoke(&ChatRequest::default()));
    assert_eq!(result, Err(AssistantError::Unavailable));
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(AssistantError::Status(502).to_string(), "assistant responded with status 502");
    assert_eq!(
        AssistantError::Transport("offline".to_owned()).to_string(),
        "assistant request failed: offline"
    );
}
