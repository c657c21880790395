//! Bookkeeping for a provider's persisted session and its startup restore.
//!
//! A restore runs once, for the first subscriber. Any sign-in, sign-up or
//! sign-out that settles the session while the restore is in flight wins;
//! the late restore result is dropped.

#[cfg(test)]
#[path = "session_slot_test.rs"]
mod session_slot_test;

use super::types::{Identity, PersistedSession};

#[derive(Debug, Default)]
pub struct SessionSlot {
    current: Option<PersistedSession>,
    /// Session is authoritative: restored or set by an explicit auth call.
    checked: bool,
    checking: bool,
}

impl SessionSlot {
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn identity(&self) -> Option<Identity> {
        self.current.as_ref().map(PersistedSession::identity)
    }

    /// Returns `true` for the caller that should start the restore.
    pub fn claim_restore(&mut self) -> bool {
        let start = !self.checked && !self.checking;
        if start {
            self.checking = true;
        }
        start
    }

    /// Record the result of an explicit auth call.
    pub fn settle(&mut self, session: Option<PersistedSession>) {
        self.current = session;
        self.checked = true;
        self.checking = false;
    }

    /// Record a restore result unless the session was settled meanwhile.
    /// Returns whether it was applied.
    pub fn settle_restored(&mut self, session: Option<PersistedSession>) -> bool {
        if self.checked {
            self.checking = false;
            return false;
        }
        self.settle(session);
        true
    }
}
