//! Firebase email/password provider over the Identity Toolkit REST API.
//!
//! Browser-only (`hydrate`). The session survives reloads through
//! `localStorage`; the first subscriber triggers a token refresh that
//! decides whether the stored session is still valid.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `ProviderError::Network`; provider error
//! envelopes are mapped through `ProviderError::from_provider_code`. A failed
//! refresh clears the stored session and reports signed-out.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ProviderError;
use super::provider::{IdentityProvider, SessionCallback, SessionListeners, Subscription, lock};
use super::session_slot::SessionSlot;
use super::types::{
    Identity, PasswordAuthRequest, PasswordAuthResponse, PersistedSession, ProviderErrorEnvelope,
    TokenRefreshRequest, TokenRefreshResponse,
};
use crate::config::FirebaseConfig;

const STORAGE_KEY: &str = "taskaid_session";

#[derive(Clone)]
pub struct FirebaseProvider {
    config: FirebaseConfig,
    slot: Arc<Mutex<SessionSlot>>,
    listeners: SessionListeners,
}

impl FirebaseProvider {
    pub fn new(config: FirebaseConfig) -> Self {
        Self { config, slot: Arc::default(), listeners: SessionListeners::default() }
    }

    /// Persist and announce the result of an explicit auth call.
    fn publish(&self, session: Option<PersistedSession>) {
        persist(session.as_ref());
        let identity = session.as_ref().map(PersistedSession::identity);
        lock(&self.slot).settle(session);
        self.listeners.notify(identity.as_ref());
    }

    /// Like `publish`, but loses to any auth call that settled the session
    /// while the refresh was in flight.
    fn publish_restored(&self, session: Option<PersistedSession>) {
        let identity = session.as_ref().map(PersistedSession::identity);
        let persisted = session.clone();
        if !lock(&self.slot).settle_restored(session) {
            leptos::logging::log!("session settled during restore; keeping it");
            return;
        }
        persist(persisted.as_ref());
        self.listeners.notify(identity.as_ref());
    }

    async fn restore(&self) {
        let Some(stored) = load_stored_session() else {
            self.publish_restored(None);
            return;
        };
        let body = TokenRefreshRequest::new(&stored.refresh_token);
        match post_json::<_, TokenRefreshResponse>(&self.config.refresh_url(), &body).await {
            Ok(refresh) => {
                leptos::logging::log!("restored session for {}", stored.email);
                self.publish_restored(Some(stored.refreshed(refresh)));
            }
            Err(e) => {
                leptos::logging::warn!("stored session rejected: {e}");
                self.publish_restored(None);
            }
        }
    }

    async fn password_auth(&self, url: &str, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let body = PasswordAuthRequest { email, password, return_secure_token: true };
        let resp = post_json::<_, PasswordAuthResponse>(url, &body).await?;
        let session = PersistedSession::from(resp);
        let identity = session.identity();
        self.publish(Some(session));
        Ok(identity)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.password_auth(&self.config.sign_up_url(), email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.password_auth(&self.config.sign_in_url(), email, password).await
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        // Firebase sign-out is client-side: forget the tokens.
        self.publish(None);
        Ok(())
    }

    fn on_session_change(&self, callback: SessionCallback) -> Subscription {
        let subscription = self.listeners.register(Arc::clone(&callback));
        let (checked, start_check, current) = {
            let mut slot = lock(&self.slot);
            let start = slot.claim_restore();
            (slot.is_checked(), start, slot.identity())
        };
        if checked {
            callback(current);
        } else if start_check {
            let provider = self.clone();
            leptos::task::spawn_local(async move { provider.restore().await });
        }
        subscription
    }
}

async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ProviderError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let resp = Request::post(url)
        .json(body)
        .map_err(|e| ProviderError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ProviderError::Network(e.to_string()))
}

async fn error_from_response(resp: Response) -> ProviderError {
    let status = resp.status();
    match resp.json::<ProviderErrorEnvelope>().await {
        Ok(envelope) => ProviderError::from_provider_code(&envelope.error.message),
        Err(_) => ProviderError::Rejected(format!("HTTP {status}")),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_stored_session() -> Option<PersistedSession> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            leptos::logging::warn!("discarding unreadable stored session: {e}");
            clear_stored_session();
            None
        }
    }
}

fn persist(session: Option<&PersistedSession>) {
    match session {
        Some(s) => store_session(s),
        None => clear_stored_session(),
    }
}

fn store_session(session: &PersistedSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(session) {
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}

fn clear_stored_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
