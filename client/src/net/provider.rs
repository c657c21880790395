//! Identity provider boundary and session-change listener plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only consumer of this trait. Providers push session
//! changes to registered callbacks; nothing polls.
//!
//! CONCURRENCY
//! ===========
//! Provider objects are `Send + Sync` so they can sit behind an `Arc` in
//! reactive context. Their futures are `!Send` because browser fetches are.
//! Listener callbacks run after the registry lock is released, so a callback
//! may drop its own `Subscription`.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;

use super::error::ProviderError;
use super::types::Identity;

/// Callback fired with the provider's current identity (`None` = signed out).
pub type SessionCallback = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Register `callback` for session changes, including the initial
    /// session check. Dropping the returned handle unregisters it.
    fn on_session_change(&self, callback: SessionCallback) -> Subscription;
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, SessionCallback)>,
}

/// Registry of session-change callbacks shared by provider implementations.
#[derive(Clone, Default)]
pub struct SessionListeners {
    table: Arc<Mutex<ListenerTable>>,
}

impl SessionListeners {
    pub fn register(&self, callback: SessionCallback) -> Subscription {
        let mut table = lock(&self.table);
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, callback));
        Subscription { id, table: Arc::downgrade(&self.table) }
    }

    /// Deliver `identity` to every registered callback in registration order.
    pub fn notify(&self, identity: Option<&Identity>) {
        let callbacks = lock(&self.table)
            .entries
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect::<Vec<_>>();
        for callback in callbacks {
            callback(identity.cloned());
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.table).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a registered session callback.
pub struct Subscription {
    id: u64,
    table: Weak<Mutex<ListenerTable>>,
}

impl Subscription {
    /// Stop receiving notifications. Same as dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            lock(&table).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
