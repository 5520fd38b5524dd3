use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert!(cfg.assets_dir.ends_with("../public"));
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("HOST", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/portfolio"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/portfolio"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    assert_eq!(err.to_string(), "invalid PORT: 70000");
}

#[test]
fn invalid_host_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost:80")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(_)));
}
