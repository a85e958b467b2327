use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let cfg = Config::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("SITE_ROOT", "/srv/site")]))
        .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let cfg = Config::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn blank_site_root_means_default() {
    let cfg = Config::from_lookup(lookup(&[("SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
}
