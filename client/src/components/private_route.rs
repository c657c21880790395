//! Route guard for authenticated pages.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppRoute;
use crate::state::auth::SessionStore;
use crate::util::auth::{GuardOutcome, install_unauth_redirect, route_outcome};

/// Renders `children` only for a signed-in session.
///
/// Shows a loading placeholder until the provider has reported, and sends
/// signed-out visitors back to the landing page.
#[component]
pub fn PrivateRoute(store: SessionStore, children: ChildrenFn) -> impl IntoView {
    let session = store.session();
    let pathname = use_location().pathname;

    // Memo so identity changes under the same outcome don't remount children.
    let outcome = Memo::new(move |_| route_outcome(AppRoute::from_path(&pathname.get()), &session.get()));
    install_unauth_redirect(outcome.into(), use_navigate());

    move || match outcome.get() {
        GuardOutcome::Loading => view! {
            <div class="route-guard route-guard--loading">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect => view! { <div class="route-guard"></div> }.into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}
