use super::*;

#[test]
fn missing_api_key_selects_in_memory_accounts() {
    assert_eq!(ClientConfig::from_values(None, None, None), ClientConfig::default());
    assert!(ClientConfig::from_values(Some("   "), Some("https://example.test"), None).firebase.is_none());
}

#[test]
fn api_key_uses_default_endpoints() {
    let config = ClientConfig::from_values(Some(" key-123 "), None, None);
    let firebase = config.firebase.unwrap();
    assert_eq!(firebase.api_key, "key-123");
    assert_eq!(firebase.identity_toolkit_url, DEFAULT_IDENTITY_TOOLKIT_URL);
    assert_eq!(firebase.secure_token_url, DEFAULT_SECURE_TOKEN_URL);
}

#[test]
fn endpoint_overrides_drop_trailing_slash() {
    let config = ClientConfig::from_values(Some("k"), Some("http://localhost:9099/identitytoolkit/v1/"), Some(""));
    let firebase = config.firebase.unwrap();
    assert_eq!(firebase.identity_toolkit_url, "http://localhost:9099/identitytoolkit/v1");
    assert_eq!(firebase.secure_token_url, DEFAULT_SECURE_TOKEN_URL);
}

#[test]
fn firebase_urls_carry_key() {
    let firebase = ClientConfig::from_values(Some("abc"), None, None).firebase.unwrap();
    assert_eq!(
        firebase.sign_up_url(),
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=abc"
    );
    assert_eq!(
        firebase.sign_in_url(),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=abc"
    );
    assert_eq!(firebase.refresh_url(), "https://securetoken.googleapis.com/v1/token?key=abc");
}
