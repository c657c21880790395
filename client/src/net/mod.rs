//! Identity provider adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the boundary the session store consumes, `memory` and
//! `firebase` implement it, and `types`/`error` carry the shared schema.

pub mod error;
#[cfg(feature = "hydrate")]
pub mod firebase;
pub mod memory;
pub mod provider;
pub mod session_slot;
pub mod types;

use std::sync::Arc;

use crate::config::ClientConfig;
use provider::IdentityProvider;

/// Pick the identity provider for this build.
///
/// Firebase is only reachable from the browser; server rendering and builds
/// without an API key fall back to in-memory accounts.
pub fn identity_provider(config: &ClientConfig) -> Arc<dyn IdentityProvider> {
    #[cfg(feature = "hydrate")]
    if let Some(firebase) = config.firebase.clone() {
        return Arc::new(firebase::FirebaseProvider::new(firebase));
    }

    if config.firebase.is_none() {
        leptos::logging::log!("no Firebase API key configured; using in-memory accounts");
    }
    Arc::new(memory::MemoryProvider::new())
}
