use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

const POPUP_URL: &str = "https://genesis.example/auth/popup";

#[test]
fn required_values_only_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("FIREBASE_API_KEY", "AIza-test"),
        ("FEDERATED_SIGN_IN_URL", POPUP_URL),
    ]))
    .unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.identity.api_key, "AIza-test");
    assert_eq!(config.identity.identity_endpoint, "https://identitytoolkit.googleapis.com");
    assert_eq!(config.identity.federated_url, POPUP_URL);
}

#[test]
fn all_values_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("FIREBASE_API_KEY", "k"),
        ("IDENTITY_ENDPOINT", "http://localhost:9099/identitytoolkit.googleapis.com"),
        ("FEDERATED_SIGN_IN_URL", "http://localhost:5000/popup"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.identity.identity_endpoint, "http://localhost:9099/identitytoolkit.googleapis.com");
    assert_eq!(config.identity.federated_url, "http://localhost:5000/popup");
}

#[test]
fn missing_api_key_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "8080")])),
        Err(ConfigError::Missing("FIREBASE_API_KEY"))
    );
}

#[test]
fn missing_federated_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("FIREBASE_API_KEY", "k")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("FEDERATED_SIGN_IN_URL"));
    assert_eq!(err.to_string(), "missing required env var FEDERATED_SIGN_IN_URL");
}

#[test]
fn blank_federated_url_counts_as_missing() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("FIREBASE_API_KEY", "k"), ("FEDERATED_SIGN_IN_URL", "  ")])),
        Err(ConfigError::Missing("FEDERATED_SIGN_IN_URL"))
    );
}

#[test]
fn blank_api_key_counts_as_missing() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("FIREBASE_API_KEY", "   "), ("FEDERATED_SIGN_IN_URL", POPUP_URL)])),
        Err(ConfigError::Missing("FIREBASE_API_KEY"))
    );
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("PORT", "eighty"),
        ("FIREBASE_API_KEY", "k"),
        ("FEDERATED_SIGN_IN_URL", POPUP_URL),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn blank_optional_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", ""),
        ("FIREBASE_API_KEY", "k"),
        ("IDENTITY_ENDPOINT", " "),
        ("FEDERATED_SIGN_IN_URL", POPUP_URL),
    ]))
    .unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.identity.identity_endpoint, DEFAULT_IDENTITY_ENDPOINT);
}
