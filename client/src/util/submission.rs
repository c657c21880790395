//! Single-flight form submission state.
//!
//! `submit_auth` runs the whole protocol: validated input or bail out, one
//! attempt at a time, then the session store call and `finish`. Writes go through `try_set` because the
//! dialog may have been closed before the provider answers.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use leptos::prelude::*;

use crate::net::error::ProviderError;
use crate::state::auth::SessionStore;
use crate::util::validation::{Credentials, FormErrors};

#[derive(Clone, Copy, Debug)]
pub struct Submission {
    submitting: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self { submitting: RwSignal::new(false), error: RwSignal::new(None) }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Form-level error from the last attempt.
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn try_begin(&self) -> bool {
        if self.submitting.get_untracked() {
            return false;
        }
        self.submitting.set(true);
        self.error.set(None);
        true
    }

    /// Settle the in-flight submission. Returns `true` on success.
    pub fn finish(&self, result: &Result<(), ProviderError>) -> bool {
        let _ = self.submitting.try_set(false);
        match result {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::warn!("auth submission failed: {e}");
                let _ = self.error.try_set(Some(e.to_string()));
                false
            }
        }
    }
}

/// Which session store call a form makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
}

/// How a form submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; the provider was not called.
    Invalid(FormErrors),
    /// Another submission from this form is still in flight.
    Busy,
    /// The provider rejected the attempt; the error is on the `Submission`.
    Failed,
    Succeeded,
}

/// Submit validated form input through the session store.
pub async fn submit_auth(
    store: &SessionStore,
    submission: Submission,
    action: AuthAction,
    input: Result<Credentials, FormErrors>,
) -> SubmitOutcome {
    let credentials = match input {
        Ok(credentials) => credentials,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    if !submission.try_begin() {
        return SubmitOutcome::Busy;
    }

    let result = match action {
        AuthAction::SignIn => store.sign_in(&credentials.email, &credentials.password).await,
        AuthAction::SignUp => store.sign_up(&credentials.email, &credentials.password).await,
    };
    if submission.finish(&result) { SubmitOutcome::Succeeded } else { SubmitOutcome::Failed }
}

/// Sign out through the session store; a failure is kept for display.
pub async fn submit_logout(store: &SessionStore, submission: Submission) -> SubmitOutcome {
    if !submission.try_begin() {
        return SubmitOutcome::Busy;
    }
    let result = store.logout().await;
    if submission.finish(&result) { SubmitOutcome::Succeeded } else { SubmitOutcome::Failed }
}
