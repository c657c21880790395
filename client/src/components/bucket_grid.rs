//! Bucket column of the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::{Bucket, SAMPLE_BUCKETS};

#[component]
pub fn BucketGrid() -> impl IntoView {
    view! {
        <section class="bucket-grid">
            <div class="pane-header">
                <h2 class="pane-header__title">"Buckets"</h2>
                <button type="button" class="btn btn--primary btn--sm">"+ Bucket"</button>
            </div>
            <div class="bucket-grid__cards">
                {SAMPLE_BUCKETS.iter().map(|bucket| view! { <BucketCard bucket=*bucket/> }).collect_view()}
                <button type="button" class="card bucket-card bucket-card--add">"+ Add Bucket"</button>
            </div>
        </section>
    }
}

#[component]
fn BucketCard(bucket: Bucket) -> impl IntoView {
    view! {
        <div class="card bucket-card">
            <span class="bucket-card__emoji">{bucket.emoji}</span>
            <div class="bucket-card__body">
                <h3 class="bucket-card__name">{bucket.name}</h3>
                <p class="bucket-card__count">{bucket.count_label()}</p>
            </div>
        </div>
    }
}
