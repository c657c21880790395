use super::*;

#[test]
fn maps_duplicate_account() {
    assert_eq!(ProviderError::from_provider_code("EMAIL_EXISTS"), ProviderError::EmailExists);
}

#[test]
fn credential_failures_collapse_to_one_variant() {
    for code in ["EMAIL_NOT_FOUND", "INVALID_PASSWORD", "INVALID_LOGIN_CREDENTIALS"] {
        assert_eq!(ProviderError::from_provider_code(code), ProviderError::InvalidCredentials);
    }
}

#[test]
fn weak_password_keeps_provider_detail() {
    assert_eq!(
        ProviderError::from_provider_code("WEAK_PASSWORD : Password should be at least 6 characters"),
        ProviderError::WeakPassword("Password should be at least 6 characters".to_owned())
    );
    assert_eq!(
        ProviderError::from_provider_code("WEAK_PASSWORD"),
        ProviderError::WeakPassword("password is too weak".to_owned())
    );
}

#[test]
fn throttling_and_disabled_accounts() {
    assert_eq!(ProviderError::from_provider_code("TOO_MANY_ATTEMPTS_TRY_LATER"), ProviderError::TooManyAttempts);
    assert_eq!(ProviderError::from_provider_code("USER_DISABLED"), ProviderError::UserDisabled);
}

#[test]
fn unknown_codes_are_rejected_verbatim() {
    assert_eq!(
        ProviderError::from_provider_code("OPERATION_NOT_ALLOWED : Password sign-in is disabled"),
        ProviderError::Rejected("OPERATION_NOT_ALLOWED".to_owned())
    );
}

#[test]
fn display_is_user_facing() {
    assert_eq!(ProviderError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(ProviderError::Network("offline".to_owned()).to_string(), "network error: offline");
}
