//! Task column of the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::{SAMPLE_TASKS, Task};

#[component]
pub fn TaskList() -> impl IntoView {
    view! {
        <section class="task-list">
            <div class="pane-header">
                <h2 class="pane-header__title">"Tasks"</h2>
                <div class="pane-header__actions">
                    <button type="button" class="btn btn--ghost btn--sm">"Filter"</button>
                    <button type="button" class="btn btn--primary btn--sm">"+ Task"</button>
                </div>
            </div>
            <ul class="task-list__items">
                {SAMPLE_TASKS.iter().map(|task| view! { <TaskRow task=*task/> }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let title_class = if task.completed { "task-row__title task-row__title--done" } else { "task-row__title" };

    view! {
        <li class="card task-row">
            // Read-only until tasks have a backend.
            <input type="checkbox" class="task-row__check" prop:checked=task.completed disabled=true/>
            <div class="task-row__body">
                <h3 class=title_class>{task.title}</h3>
                <p class="task-row__due">"Due: " {task.due}</p>
            </div>
        </li>
    }
}
