//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components that need the session take a `SessionStore` prop. Dashboard panes
//! render the fixed sample data from `state::dashboard`.

pub mod auth_forms;
pub mod bucket_grid;
pub mod header;
pub mod modal;
pub mod private_route;
pub mod summary_bar;
pub mod task_list;
