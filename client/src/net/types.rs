//! Identity types and Firebase REST DTOs.
//!
//! DESIGN
//! ======
//! `Identity` is what the rest of the app sees. The request/response structs
//! mirror the Firebase wire format (camelCase for Identity Toolkit,
//! snake_case for Secure Token) and never leave the `net` module.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned user ID.
    pub uid: String,
    pub email: String,
}

/// Session material kept in `localStorage` between page loads.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

impl PersistedSession {
    pub fn identity(&self) -> Identity {
        Identity { uid: self.uid.clone(), email: self.email.clone() }
    }

    /// Rotate tokens after a successful refresh.
    pub fn refreshed(self, refresh: TokenRefreshResponse) -> Self {
        Self { uid: refresh.user_id, id_token: refresh.id_token, refresh_token: refresh.refresh_token, ..self }
    }
}

impl std::fmt::Debug for PersistedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedSession")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body for `accounts:signUp` and `accounts:signInWithPassword`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthResponse {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

impl From<PasswordAuthResponse> for PersistedSession {
    fn from(resp: PasswordAuthResponse) -> Self {
        Self { uid: resp.local_id, email: resp.email, id_token: resp.id_token, refresh_token: resp.refresh_token }
    }
}

#[derive(Serialize)]
pub struct TokenRefreshRequest<'a> {
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
}

impl<'a> TokenRefreshRequest<'a> {
    pub fn new(refresh_token: &'a str) -> Self {
        Self { grant_type: "refresh_token", refresh_token }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenRefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub user_id: String,
}

/// `{"error": {"message": "EMAIL_EXISTS"}}`
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderErrorEnvelope {
    pub error: ProviderErrorBody,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub message: String,
}
