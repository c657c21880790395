//! Dashboard top bar: brand, theme toggle, and the user menu.

use leptos::prelude::*;

use crate::state::auth::SessionStore;
use crate::util::submission::{Submission, submit_logout};
use crate::util::theme::{self, Theme};

#[component]
pub fn Header(store: SessionStore) -> impl IntoView {
    let session = store.session();
    let theme = RwSignal::new(Theme::Light);
    let menu_open = RwSignal::new(false);
    let logout = Submission::new();

    // Stored preference is browser-only; read it after hydration.
    Effect::new(move || {
        let preferred = theme::read_preference();
        theme::apply(preferred);
        theme.set(preferred);
    });

    let on_toggle_theme = move |_| {
        let next = theme::toggle(theme.get_untracked());
        theme.set(next);
    };

    // Menu stays open so a failure can be shown; the guard redirects on success.
    let on_logout = move |_| {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            submit_logout(&store, logout).await;
        });
    };

    let email = move || session.with(|s| s.email().map(str::to_owned).unwrap_or_default());

    view! {
        <header class="header">
            <span class="header__brand">"TaskAid"</span>
            <span class="header__spacer"></span>
            <button class="btn header__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                {move || theme.get().toggle_icon()}
            </button>
            <div class="header__user">
                <button class="btn header__user-button" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    {email}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="header__menu" role="menu">
                        <button class="header__menu-item" role="menuitem" on:click=on_toggle_theme>
                            {move || match theme.get() {
                                Theme::Light => "Theme: Light",
                                Theme::Dark => "Theme: Dark",
                            }}
                        </button>
                        <button
                            class="header__menu-item"
                            role="menuitem"
                            disabled=move || logout.is_submitting()
                            on:click=on_logout.clone()
                        >
                            "Log Out"
                        </button>
                        <Show when=move || logout.error().is_some()>
                            <p class="header__menu-error" role="alert">
                                {move || format!("Log out failed: {}", logout.error().unwrap_or_default())}
                            </p>
                        </Show>
                    </div>
                </Show>
            </div>
        </header>
    }
}
