//! Modal dialog primitive with a trigger button.
//!
//! DESIGN
//! ======
//! `ModalState` is uncontrolled (owns its flag) unless the parent passes
//! both an `open` signal and an `on_open_change` setter, in which case it
//! only ever calls the setter. A closed modal renders no dialog DOM.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ModalState {
    internal: RwSignal<bool>,
    controlled: Option<(Signal<bool>, Callback<bool>)>,
}

impl ModalState {
    pub fn uncontrolled() -> Self {
        Self { internal: RwSignal::new(false), controlled: None }
    }

    pub fn controlled(open: Signal<bool>, set_open: Callback<bool>) -> Self {
        Self { internal: RwSignal::new(false), controlled: Some((open, set_open)) }
    }

    /// Controlled only when both halves are supplied. A lone `open` value
    /// seeds the internal flag.
    pub fn from_props(open: Option<Signal<bool>>, on_open_change: Option<Callback<bool>>) -> Self {
        match (open, on_open_change) {
            (Some(open), Some(set_open)) => Self::controlled(open, set_open),
            (open, _) => {
                let initial = open.is_some_and(|o| o.get_untracked());
                Self { internal: RwSignal::new(initial), controlled: None }
            }
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    pub fn is_open(&self) -> bool {
        match self.controlled {
            Some((open, _)) => open.get(),
            None => self.internal.get(),
        }
    }

    pub fn set_open(&self, open: bool) {
        match self.controlled {
            Some((_, set_open)) => set_open.run(open),
            None => self.internal.set(open),
        }
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Trigger button plus a dialog rendered only while open.
///
/// Dismissed by the backdrop, the close button, or Escape.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] trigger_label: String,
    #[prop(into, default = String::from("btn"))] trigger_class: String,
    #[prop(optional, into)] open: Option<Signal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = ModalState::from_props(open, on_open_change);
    let panel = NodeRef::<leptos::html::Div>::new();

    // Panel takes focus when it mounts so Escape works without a click first.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = panel.get() {
            let _ = el.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            state.close();
        }
    };

    view! {
        <button type="button" class=trigger_class on:click=move |_| state.open()>
            {trigger_label}
        </button>
        <Show when=move || state.is_open()>
            <div class="dialog-backdrop" on:click=move |_| state.close()>
                <div
                    node_ref=panel
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <button type="button" class="dialog__close" on:click=move |_| state.close() title="Close">
                        "✕"
                    </button>
                    <h3 class="dialog__title">{title.clone()}</h3>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
