//! Authenticated dashboard: tasks beside buckets, with a stats strip below.
//!
//! Mounted behind `PrivateRoute`, so a signed-in session is already known.

use leptos::prelude::*;

use crate::components::bucket_grid::BucketGrid;
use crate::components::header::Header;
use crate::components::summary_bar::SummaryBar;
use crate::components::task_list::TaskList;
use crate::state::auth::SessionStore;
use crate::state::dashboard::SAMPLE_SUMMARY;

#[component]
pub fn DashboardPage(store: SessionStore) -> impl IntoView {
    view! {
        <div class="dashboard">
            <Header store=store/>
            <main class="dashboard__main">
                <div class="dashboard__panes">
                    <TaskList/>
                    <BucketGrid/>
                </div>
                <SummaryBar summary=SAMPLE_SUMMARY/>
            </main>
        </div>
    }
}
