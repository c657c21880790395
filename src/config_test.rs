use super::*;

// =============================================================================
// from_vars
// =============================================================================

#[test]
fn unset_vars_use_defaults() {
    let config = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_host_and_port() {
    let config = ServerConfig::from_vars(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back() {
    let config = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn port_whitespace_trimmed() {
    let config = ServerConfig::from_vars(None, Some(" 4000 ")).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn non_numeric_port_rejected() {
    assert_eq!(
        ServerConfig::from_vars(None, Some("http")),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
}

#[test]
fn out_of_range_port_rejected() {
    assert!(matches!(ServerConfig::from_vars(None, Some("70000")), Err(ConfigError::InvalidPort(_))));
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_matches_from_vars() {
    let host = std::env::var("HOST").ok();
    let port = std::env::var("PORT").ok();
    assert_eq!(ServerConfig::from_env(), ServerConfig::from_vars(host.as_deref(), port.as_deref()));
}
