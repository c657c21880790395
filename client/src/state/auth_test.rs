use super::*;
use crate::net::memory::MemoryProvider;
use crate::net::provider::SessionListeners;
use async_trait::async_trait;
use futures::executor::block_on;

fn identity(email: &str) -> Identity {
    Identity { uid: format!("uid-{email}"), email: email.to_owned() }
}

/// Provider whose notifications are driven by the test.
#[derive(Default)]
struct ManualProvider {
    listeners: SessionListeners,
}

impl ManualProvider {
    fn emit(&self, identity: Option<Identity>) {
        self.listeners.notify(identity.as_ref());
    }
}

#[async_trait(?Send)]
impl IdentityProvider for ManualProvider {
    async fn sign_up(&self, _email: &str, _password: &str) -> Result<Identity, ProviderError> {
        Err(ProviderError::Network("offline".to_owned()))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Identity, ProviderError> {
        Err(ProviderError::Network("offline".to_owned()))
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        Err(ProviderError::Network("offline".to_owned()))
    }

    fn on_session_change(&self, callback: SessionCallback) -> Subscription {
        self.listeners.register(callback)
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_pending_without_identity() {
    let session = Session::default();
    assert_eq!(session.status(), SessionStatus::Pending);
    assert!(session.identity().is_none());
}

#[test]
fn resolved_session_exposes_email() {
    let session = Session::Resolved(Some(identity("a@example.com")));
    assert_eq!(session.status(), SessionStatus::Resolved);
    assert_eq!(session.email(), Some("a@example.com"));
    assert!(session.is_authenticated());
    assert!(!Session::Resolved(None).is_authenticated());
}

// =============================================================
// SessionStore notifications
// =============================================================

#[test]
fn store_starts_pending_until_provider_reports() {
    let provider = Arc::new(ManualProvider::default());
    let store = SessionStore::new(provider.clone());
    store.connect();
    assert_eq!(store.current(), Session::Pending);

    provider.emit(Some(identity("a@example.com")));
    assert_eq!(store.current(), Session::Resolved(Some(identity("a@example.com"))));
}

#[test]
fn store_tracks_sign_out_and_repeats_idempotently() {
    let provider = Arc::new(ManualProvider::default());
    let store = SessionStore::new(provider.clone());
    store.connect();

    provider.emit(Some(identity("a@example.com")));
    provider.emit(None);
    assert_eq!(store.current(), Session::Resolved(None));

    provider.emit(None);
    provider.emit(None);
    assert_eq!(store.current(), Session::Resolved(None));
}

#[test]
fn connect_registers_once() {
    let provider = Arc::new(ManualProvider::default());
    let store = SessionStore::new(provider.clone());
    store.connect();
    store.connect();
    assert!(store.is_connected());
    assert_eq!(provider.listeners.len(), 1);
}

#[test]
fn disconnect_stops_updates() {
    let provider = Arc::new(ManualProvider::default());
    let store = SessionStore::new(provider.clone());
    store.connect();
    provider.emit(None);

    store.disconnect();
    assert!(!store.is_connected());
    assert!(provider.listeners.is_empty());

    provider.emit(Some(identity("late@example.com")));
    assert_eq!(store.current(), Session::Resolved(None));
}

#[test]
fn store_ignores_notifications_before_connect() {
    let provider = Arc::new(ManualProvider::default());
    let store = SessionStore::new(provider.clone());
    provider.emit(Some(identity("a@example.com")));
    assert_eq!(store.current(), Session::Pending);
}

// =============================================================
// SessionStore operations
// =============================================================

#[test]
fn sign_up_and_logout_flow_through_provider_notifications() {
    let store = SessionStore::new(Arc::new(MemoryProvider::new()));
    store.connect();
    assert_eq!(store.current(), Session::Resolved(None));

    block_on(store.sign_up("user@example.com", "Valid1!ab")).unwrap();
    assert_eq!(store.current().email(), Some("user@example.com"));

    block_on(store.logout()).unwrap();
    assert_eq!(store.current(), Session::Resolved(None));
}

#[test]
fn sign_in_failure_propagates_and_keeps_session() {
    let provider = MemoryProvider::new().with_account("user@example.com", "Valid1!ab");
    let store = SessionStore::new(Arc::new(provider));
    store.connect();

    assert_eq!(
        block_on(store.sign_in("user@example.com", "wrong")),
        Err(ProviderError::InvalidCredentials)
    );
    assert_eq!(store.current(), Session::Resolved(None));

    block_on(store.sign_in("user@example.com", "Valid1!ab")).unwrap();
    assert!(store.current().is_authenticated());
}

#[test]
fn logout_failure_is_returned_not_applied() {
    let provider = Arc::new(ManualProvider::default());
    let store = SessionStore::new(provider.clone());
    store.connect();
    provider.emit(Some(identity("a@example.com")));

    assert!(block_on(store.logout()).is_err());
    assert!(store.current().is_authenticated());
}
