//! Client configuration baked in at build time.
//!
//! The browser bundle cannot read the server's environment, so the identity
//! provider settings are captured with `option_env!` when the WASM crate is
//! compiled:
//!
//! - `TASKAID_FIREBASE_API_KEY`: enables the Firebase provider when set
//! - `TASKAID_IDENTITY_TOOLKIT_URL`: default Google Identity Toolkit v1 URL
//! - `TASKAID_SECURE_TOKEN_URL`: default Google Secure Token v1 URL
//!
//! Without an API key the app runs against in-memory accounts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";

/// Endpoints and key for the Firebase email/password REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub identity_toolkit_url: String,
    pub secure_token_url: String,
}

impl FirebaseConfig {
    pub fn sign_up_url(&self) -> String {
        format!("{}/accounts:signUp?key={}", self.identity_toolkit_url, self.api_key)
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}/accounts:signInWithPassword?key={}", self.identity_toolkit_url, self.api_key)
    }

    pub fn refresh_url(&self) -> String {
        format!("{}/token?key={}", self.secure_token_url, self.api_key)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// `None` selects the in-memory provider.
    pub firebase: Option<FirebaseConfig>,
}

impl ClientConfig {
    /// Read the values captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TASKAID_FIREBASE_API_KEY"),
            option_env!("TASKAID_IDENTITY_TOOLKIT_URL"),
            option_env!("TASKAID_SECURE_TOKEN_URL"),
        )
    }

    /// Build config from raw values. Blank strings count as unset.
    pub fn from_values(api_key: Option<&str>, identity_toolkit_url: Option<&str>, secure_token_url: Option<&str>) -> Self {
        let Some(api_key) = non_blank(api_key) else {
            return Self::default();
        };
        let identity_toolkit_url = non_blank(identity_toolkit_url)
            .unwrap_or(DEFAULT_IDENTITY_TOOLKIT_URL)
            .trim_end_matches('/')
            .to_owned();
        let secure_token_url = non_blank(secure_token_url)
            .unwrap_or(DEFAULT_SECURE_TOKEN_URL)
            .trim_end_matches('/')
            .to_owned();

        Self {
            firebase: Some(FirebaseConfig { api_key: api_key.to_owned(), identity_toolkit_url, secure_token_url }),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
