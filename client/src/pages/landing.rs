//! Public landing page with the sign-in and sign-up entry points.
//!
//! Every call-to-action mounts its own `SignUpDialog`, so opening one never
//! affects another.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::auth_forms::{SignInDialog, SignUpDialog};
use crate::state::auth::SessionStore;

/// One card in the features section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Smart Buckets",
        blurb: "Organize related tasks together with customizable buckets that keep you focused.",
    },
    Feature {
        title: "Due Date Tracking",
        blurb: "Never miss a deadline with intelligent due date reminders and priority sorting.",
    },
    Feature {
        title: "Analytics",
        blurb: "Track your productivity patterns and maintain momentum with detailed insights.",
    },
];

pub const TRUSTED_BY: &[&str] = &["Company A", "Company B", "Company C"];

pub const FOOTER_LINKS: &[&str] = &["About", "Privacy", "Terms"];

#[component]
pub fn LandingPage(store: SessionStore) -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">"TaskAid"</span>
                <nav class="landing__nav">
                    <SignInDialog store=store.clone()/>
                    <SignUpDialog store=store.clone() trigger_label="Get Started"/>
                </nav>
            </header>

            <main class="landing__main">
                <section class="hero">
                    <div class="hero__copy">
                        <h1 class="hero__title">"Organize your tasks, amplify your productivity"</h1>
                        <p class="hero__lede">
                            "TaskAid helps you manage your tasks with smart buckets and intuitive workflows. "
                            "Stay organized, never miss a deadline, and achieve more every day."
                        </p>
                        <SignUpDialog store=store.clone() trigger_label="Get Started Free" trigger_class="btn btn--primary btn--lg"/>
                    </div>
                    <div class="hero__demo">"Product Demo"</div>
                </section>

                <section class="social-proof">
                    <p class="social-proof__caption">"Trusted by productive teams everywhere"</p>
                    <div class="social-proof__logos">
                        {TRUSTED_BY.iter().map(|name| view! { <span>{*name}</span> }).collect_view()}
                    </div>
                </section>

                <section class="features">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <article class="card feature">
                                    <h3 class="feature__title">{feature.title}</h3>
                                    <p class="feature__blurb">{feature.blurb}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="cta">
                    <h2 class="cta__title">"Ready to boost your productivity?"</h2>
                    <p class="cta__lede">"Join thousands of users who organize their work with TaskAid"</p>
                    <SignUpDialog store=store.clone() trigger_label="Start Free Today" trigger_class="btn btn--primary btn--lg"/>
                </section>
            </main>

            <footer class="landing__footer">
                <p>"© 2024 TaskAid. All rights reserved."</p>
                <div class="landing__footer-links">
                    {FOOTER_LINKS.iter().map(|label| view! { <a href="#">{*label}</a> }).collect_view()}
                </div>
            </footer>
        </div>
    }
}
