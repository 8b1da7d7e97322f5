use super::*;

// =============================================================================
// defaults
// =============================================================================

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_treats_blank_as_unset() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("3001")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3001");
}

// =============================================================================
// errors
// =============================================================================

#[test]
fn from_vars_rejects_bad_port() {
    for raw in ["abc", "0", "65536", "-1"] {
        let err = ServerConfig::from_vars(None, Some(raw)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}

#[test]
fn from_vars_rejects_hostname() {
    let err = ServerConfig::from_vars(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
    assert!(err.to_string().contains("HOST"));
}
