//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::AppRoute;
use crate::state::auth::Session;

/// What a guarded route renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Redirect,
    Render,
}

pub fn guard_outcome(session: &Session) -> GuardOutcome {
    match session {
        Session::Pending => GuardOutcome::Loading,
        Session::Resolved(None) => GuardOutcome::Redirect,
        Session::Resolved(Some(_)) => GuardOutcome::Render,
    }
}

/// Outcome for the route at the current location. Paths that don't need a
/// session always render; unknown paths under a guard stay guarded.
pub fn route_outcome(route: Option<AppRoute>, session: &Session) -> GuardOutcome {
    if route.is_some_and(|r| !r.requires_auth()) {
        return GuardOutcome::Render;
    }
    guard_outcome(session)
}

/// Replace the current entry with the landing route once the guard decides
/// to redirect.
pub fn install_unauth_redirect<F>(outcome: Signal<GuardOutcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if outcome.get() == GuardOutcome::Redirect {
            navigate(AppRoute::Landing.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
