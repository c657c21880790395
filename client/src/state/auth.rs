//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is built once by `App` and passed as a prop to the route
//! guard, pages, and header. It is the only thing that talks to the
//! identity provider; everything else reads `Session` through its signal.
//!
//! LIFECYCLE
//! =========
//! `connect` subscribes to provider notifications (called from an effect so
//! it only runs in the browser), `disconnect` drops the subscription on app
//! teardown. Notifications that arrive after the reactive owner is gone
//! are ignored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::net::error::ProviderError;
use crate::net::provider::{IdentityProvider, SessionCallback, Subscription, lock};
use crate::net::types::Identity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Pending,
    Resolved,
}

/// What the app currently believes about the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Waiting for the provider's first notification.
    #[default]
    Pending,
    /// Settled; `None` means signed out.
    Resolved(Option<Identity>),
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Pending => SessionStatus::Pending,
            Self::Resolved(_) => SessionStatus::Resolved,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Pending | Self::Resolved(None) => None,
            Self::Resolved(Some(identity)) => Some(identity),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.identity().map(|i| i.email.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

/// Process-wide view of authentication state backed by an identity provider.
#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    provider: Arc<dyn IdentityProvider>,
    subscription: Arc<Mutex<Option<Subscription>>>,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { session: RwSignal::new(Session::Pending), provider, subscription: Arc::default() }
    }

    /// Reactive read handle for guards and views.
    pub fn session(&self) -> Signal<Session> {
        self.session.into()
    }

    /// Current value without tracking.
    pub fn current(&self) -> Session {
        self.session.get_untracked()
    }

    /// Subscribe to provider session changes. Calling again is a no-op.
    pub fn connect(&self) {
        let mut slot = lock(&self.subscription);
        if slot.is_some() {
            return;
        }
        let session = self.session;
        let callback: SessionCallback = Arc::new(move |identity| apply_notification(session, identity));
        // Slot stays locked across registration; providers may call back synchronously.
        *slot = Some(self.provider.on_session_change(callback));
    }

    /// Drop the provider subscription; later notifications no longer land.
    pub fn disconnect(&self) {
        let subscription = lock(&self.subscription).take();
        drop(subscription);
    }

    pub fn is_connected(&self) -> bool {
        lock(&self.subscription).is_some()
    }

    /// Create an account. The session updates when the provider notifies.
    ///
    /// # Errors
    ///
    /// Returns the provider's error (duplicate email, weak password, network).
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), ProviderError> {
        self.provider.sign_up(email, password).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `ProviderError::InvalidCredentials` for unknown email or wrong password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ProviderError> {
        self.provider.sign_in(email, password).await.map(|_| ())
    }

    /// # Errors
    ///
    /// A failure leaves the session state unknown; callers report it and
    /// let the user retry.
    pub async fn logout(&self) -> Result<(), ProviderError> {
        self.provider.sign_out().await
    }
}

/// Record a provider notification, skipping writes that change nothing.
fn apply_notification(session: RwSignal<Session>, identity: Option<Identity>) {
    let next = Session::Resolved(identity);
    match session.try_with_untracked(|current| *current == next) {
        None => leptos::logging::warn!("session notification after teardown ignored"),
        Some(true) => {}
        Some(false) => {
            let _ = session.try_set(next);
        }
    }
}
