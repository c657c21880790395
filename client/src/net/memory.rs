//! In-process identity provider.
//!
//! Keeps accounts in memory with the same rules the hosted provider applies
//! (unique email, six-character password floor, generic credential errors).
//! Used for local development without an API key and by tests.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::ProviderError;
use super::provider::{IdentityProvider, SessionCallback, SessionListeners, Subscription, lock};
use super::types::Identity;

/// Provider-side password floor; stricter sign-up rules live in form validation.
pub const MIN_PROVIDER_PASSWORD_LEN: usize = 6;

struct Account {
    password: String,
    identity: Identity,
}

#[derive(Default)]
struct Accounts {
    by_email: HashMap<String, Account>,
    current: Option<Identity>,
}

#[derive(Default)]
pub struct MemoryProvider {
    accounts: Mutex<Accounts>,
    listeners: SessionListeners,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing account without signing it in.
    #[must_use]
    pub fn with_account(self, email: &str, password: &str) -> Self {
        {
            let mut accounts = lock(&self.accounts);
            let email = normalize_email(email);
            let identity = Identity { uid: uuid::Uuid::new_v4().to_string(), email: email.clone() };
            accounts.by_email.insert(email, Account { password: password.to_owned(), identity });
        }
        self
    }

    pub fn current(&self) -> Option<Identity> {
        lock(&self.accounts).current.clone()
    }

    /// Drop the current session as if it had expired on the provider side.
    pub fn expire_session(&self) {
        lock(&self.accounts).current = None;
        self.listeners.notify(None);
    }

    fn set_current(&self, identity: Option<Identity>) {
        lock(&self.accounts).current.clone_from(&identity);
        self.listeners.notify(identity.as_ref());
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MemoryProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let identity = {
            let mut accounts = lock(&self.accounts);
            let email = normalize_email(email);
            if accounts.by_email.contains_key(&email) {
                return Err(ProviderError::EmailExists);
            }
            if password.chars().count() < MIN_PROVIDER_PASSWORD_LEN {
                return Err(ProviderError::WeakPassword(format!(
                    "Password should be at least {MIN_PROVIDER_PASSWORD_LEN} characters"
                )));
            }
            let identity = Identity { uid: uuid::Uuid::new_v4().to_string(), email: email.clone() };
            accounts
                .by_email
                .insert(email, Account { password: password.to_owned(), identity: identity.clone() });
            identity
        };
        self.set_current(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let identity = {
            let accounts = lock(&self.accounts);
            match accounts.by_email.get(&normalize_email(email)) {
                Some(account) if account.password == password => account.identity.clone(),
                _ => return Err(ProviderError::InvalidCredentials),
            }
        };
        self.set_current(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.set_current(None);
        Ok(())
    }

    fn on_session_change(&self, callback: SessionCallback) -> Subscription {
        let subscription = self.listeners.register(Arc::clone(&callback));
        callback(self.current());
        subscription
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
