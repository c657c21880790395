//! Sign-in and sign-up forms and the dialogs that host them.
//!
//! Each form validates locally, then runs one submission at a time through
//! the session store and navigates to the dashboard on success. Provider
//! errors stay inside the form as feedback.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::components::modal::Modal;
use crate::state::auth::SessionStore;
use crate::util::submission::{AuthAction, SubmitOutcome, Submission, submit_auth};
use crate::util::validation::{Credentials, FormErrors, SignInInput, SignUpInput, password_strength};

#[component]
pub fn SignInDialog(store: SessionStore) -> impl IntoView {
    view! {
        <Modal title="Log In" trigger_label="Log In" trigger_class="btn btn--ghost">
            <SignInForm store=store.clone()/>
        </Modal>
    }
}

/// Sign-up dialog; every call-to-action gets its own instance.
#[component]
pub fn SignUpDialog(
    store: SessionStore,
    #[prop(into)] trigger_label: String,
    #[prop(into, default = String::from("btn btn--primary"))] trigger_class: String,
) -> impl IntoView {
    view! {
        <Modal title="Sign Up" trigger_label=trigger_label trigger_class=trigger_class>
            <SignUpForm store=store.clone()/>
        </Modal>
    }
}

#[component]
pub fn SignInForm(store: SessionStore) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let submission = Submission::new();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SignInInput { email: email.get_untracked(), password: password.get_untracked() };
        spawn_submit(store.clone(), submission, errors, navigate.clone(), AuthAction::SignIn, input.validate());
    };

    view! {
        <form class="auth-form" on:submit=on_submit novalidate>
            <div class="auth-form__field">
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || errors.with(|e| e.email.as_ref().map(ToString::to_string)))/>
            </div>
            <div class="auth-form__field">
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || errors.with(|e| e.password.as_ref().map(ToString::to_string)))/>
            </div>
            <FormError submission=submission/>
            <button type="submit" class="btn btn--primary btn--block" disabled=move || submission.is_submitting()>
                {move || if submission.is_submitting() { "Logging in..." } else { "Log In" }}
            </button>
        </form>
    }
}

#[component]
pub fn SignUpForm(store: SessionStore) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let errors = RwSignal::new(FormErrors::default());
    let submission = Submission::new();
    let navigate = use_navigate();

    let strength = Memo::new(move |_| password_strength(&password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SignUpInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
            terms: terms.get_untracked(),
        };
        spawn_submit(store.clone(), submission, errors, navigate.clone(), AuthAction::SignUp, input.validate());
    };

    view! {
        <form class="auth-form" on:submit=on_submit novalidate>
            <div class="auth-form__field">
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || errors.with(|e| e.email.as_ref().map(ToString::to_string)))/>
            </div>
            <div class="auth-form__field">
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <StrengthMeter strength=strength/>
                <FieldError message=Signal::derive(move || errors.with(|e| e.password.as_ref().map(ToString::to_string)))/>
            </div>
            <label class="auth-form__terms">
                <input
                    type="checkbox"
                    prop:checked=move || terms.get()
                    on:change=move |ev| terms.set(event_target_checked(&ev))
                />
                "I accept Terms & Privacy"
            </label>
            <FieldError message=Signal::derive(move || errors.with(|e| e.terms.as_ref().map(ToString::to_string)))/>
            <FormError submission=submission/>
            <button type="submit" class="btn btn--primary btn--block" disabled=move || submission.is_submitting()>
                {move || if submission.is_submitting() { "Creating Account..." } else { "Create Account" }}
            </button>
        </form>
    }
}

/// Show field errors now, then run the submission and go to the dashboard
/// on success. Provider errors stay on `submission`.
fn spawn_submit<N>(
    store: SessionStore,
    submission: Submission,
    errors: RwSignal<FormErrors>,
    navigate: N,
    action: AuthAction,
    input: Result<Credentials, FormErrors>,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    errors.set(input.as_ref().err().cloned().unwrap_or_default());
    leptos::task::spawn_local(async move {
        if submit_auth(&store, submission, action, input).await == SubmitOutcome::Succeeded {
            navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
        }
    });
}

/// Five-segment bar lit up to the current strength score.
#[component]
fn StrengthMeter(#[prop(into)] strength: Signal<u8>) -> impl IntoView {
    view! {
        <div class="strength-meter" aria-label="Password strength">
            {(1..=5u8)
                .map(|level| {
                    let class = move || {
                        if strength.get() >= level {
                            "strength-meter__bar strength-meter__bar--on"
                        } else {
                            "strength-meter__bar"
                        }
                    };
                    view! { <div class=class></div> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="auth-form__error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
fn FormError(submission: Submission) -> impl IntoView {
    view! {
        <Show when=move || submission.error().is_some()>
            <p class="auth-form__error auth-form__error--form" role="alert">
                {move || submission.error().unwrap_or_default()}
            </p>
        </Show>
    }
}
