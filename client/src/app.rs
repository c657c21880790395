//! Root application component with routing and the session context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::private_route::PrivateRoute;
use crate::config::ClientConfig;
use crate::net::identity_provider;
use crate::pages::{dashboard::DashboardPage, landing::LandingPage};
use crate::state::auth::SessionStore;

/// Every routable screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [Self; 2] = [Self::Landing, Self::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Router segment for `StaticSegment`.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Landing => "",
            Self::Dashboard => "dashboard",
        }
    }

    /// Match a location pathname; a single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and subscribes it to the identity provider for
/// the lifetime of the app.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(identity_provider(&ClientConfig::from_build_env()));

    // Effects only run in the browser, so SSR always renders the pending state.
    let connect = store.clone();
    Effect::new(move || connect.connect());
    let teardown = store.clone();
    on_cleanup(move || teardown.disconnect());

    let landing_store = store.clone();
    let dashboard_store = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/taskaid.css"/>
        <Title text="TaskAid"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment(AppRoute::Landing.segment())
                    view=move || view! { <LandingPage store=landing_store.clone()/> }
                />
                <Route
                    path=StaticSegment(AppRoute::Dashboard.segment())
                    view=move || {
                        let store = dashboard_store.clone();
                        view! {
                            <PrivateRoute store=store.clone()>
                                <DashboardPage store=store.clone()/>
                            </PrivateRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
