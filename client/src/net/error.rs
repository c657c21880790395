//! Errors raised by identity provider calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("an account with this email already exists")]
    EmailExists,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password rejected: {0}")]
    WeakPassword(String),
    #[error("this account has been disabled")]
    UserDisabled,
    #[error("too many attempts, try again later")]
    TooManyAttempts,
    #[error("network error: {0}")]
    Network(String),
    #[error("sign-in service rejected the request: {0}")]
    Rejected(String),
}

impl ProviderError {
    /// Map a Firebase error message (`CODE` or `CODE : detail`) to an error.
    pub fn from_provider_code(message: &str) -> Self {
        let (code, detail) = match message.split_once(" : ") {
            Some((code, detail)) => (code.trim(), Some(detail.trim())),
            None => (message.trim(), None),
        };
        match code {
            "EMAIL_EXISTS" => Self::EmailExists,
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => Self::InvalidCredentials,
            "WEAK_PASSWORD" => Self::WeakPassword(detail.unwrap_or("password is too weak").to_owned()),
            "USER_DISABLED" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            other => Self::Rejected(other.to_owned()),
        }
    }
}
