use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.functions, None);
    assert_eq!(cfg.functions_timeout_secs, DEFAULT_FUNCTIONS_TIMEOUT_SECS);
    assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    assert_eq!(cfg.allowed_functions, vec!["pet-assistant".to_owned()]);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "  "),
        ("FUNCTIONS_BASE_URL", ""),
        ("FUNCTIONS_API_KEY", "secret"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.functions, None);
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("FUNCTIONS_BASE_URL", "https://edge.example.test/functions/v1/"),
        ("FUNCTIONS_API_KEY", " anon-key "),
        ("FUNCTIONS_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.functions_timeout_secs, 5);
    assert_eq!(
        cfg.functions,
        Some(FunctionsConfig {
            base_url: "https://edge.example.test/functions/v1".into(),
            api_key: Some("anon-key".into()),
        })
    );
}

#[test]
fn base_url_without_key_has_no_key() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("FUNCTIONS_BASE_URL", "http://localhost:54321")])).unwrap();
    let functions = cfg.functions.unwrap();
    assert_eq!(functions.base_url, "http://localhost:54321");
    assert_eq!(functions.api_key, None);
}

#[test]
fn allowlist_splits_on_commas() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("FUNCTIONS_ALLOWLIST", " pet-assistant, adoption-match ,,")])).unwrap();
    assert_eq!(cfg.allowed_functions, vec!["pet-assistant".to_owned(), "adoption-match".to_owned()]);
    assert!(cfg.allows_function("adoption-match"));
    assert!(!cfg.allows_function("delete-all-users"));
}

#[test]
fn default_allowlist_only_admits_assistant() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert!(cfg.allows_function("pet-assistant"));
    assert!(!cfg.allows_function("pet-assistant-admin"));
    assert!(!cfg.allows_function(""));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn out_of_range_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn zero_timeout_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("FUNCTIONS_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "FUNCTIONS_TIMEOUT_SECS", .. }));
}
