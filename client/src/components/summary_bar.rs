//! Footer strip of dashboard stats.

use leptos::prelude::*;

use crate::state::dashboard::DashboardSummary;

#[component]
pub fn SummaryBar(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="card summary-bar">
            <span class="summary-bar__stat summary-bar__stat--done">"✓ " {summary.done_label()}</span>
            <span class="summary-bar__stat summary-bar__stat--open">"▤ " {summary.open_label()}</span>
            <span class="summary-bar__stat summary-bar__stat--streak">"🔥 " {summary.streak_label()}</span>
        </div>
    }
}
