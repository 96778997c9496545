use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
}

#[test]
fn parses_overrides_and_trims_backend_slash() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.test/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.backend_timeout, Duration::from_secs(5));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_TIMEOUT_SECS", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn zero_timeout_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", .. }));
}

#[test]
fn backend_without_scheme_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendScheme("localhost:8000".into()));
}
