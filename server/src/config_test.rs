use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(cfg.addr.to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_treats_blank_as_unset() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_HOST);
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6_host() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("3000")).unwrap();
    assert_eq!(cfg.addr.to_string(), "[::1]:3000");
}

#[test]
fn from_vars_rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_vars(None, Some("eighty")),
        Err(ConfigError::InvalidPort { value: "eighty".into() })
    );
    assert_eq!(
        ServerConfig::from_vars(None, Some("70000")),
        Err(ConfigError::InvalidPort { value: "70000".into() })
    );
}

#[test]
fn from_vars_rejects_hostname() {
    assert_eq!(
        ServerConfig::from_vars(Some("localhost"), None),
        Err(ConfigError::InvalidHost { value: "localhost".into() })
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".into() };
    assert_eq!(err.to_string(), "invalid PORT \"x\": expected an integer in 0..=65535");
}

#[test]
fn from_env_reads_host_and_port() {
    // Only test in this crate that touches HOST/PORT.
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4100");
    }
    let cfg = ServerConfig::from_env().unwrap();
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:4100");
}
