//! Display data for the dashboard.
//!
//! The dashboard has no task backend; it renders these fixed samples.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: &'static str,
    pub completed: bool,
    /// Human due label ("Today", "Tomorrow").
    pub due: &'static str,
}

/// A named grouping of tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub task_count: u32,
}

impl Bucket {
    pub fn count_label(&self) -> String {
        match self.task_count {
            1 => "1 task".to_owned(),
            n => format!("{n} tasks"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardSummary {
    pub done_today: u32,
    pub open: u32,
    pub streak_days: u32,
}

impl DashboardSummary {
    pub fn done_label(&self) -> String {
        format!("{} done today", self.done_today)
    }

    pub fn open_label(&self) -> String {
        format!("{} open", self.open)
    }

    pub fn streak_label(&self) -> String {
        format!("{}-day streak", self.streak_days)
    }
}

pub const SAMPLE_TASKS: &[Task] = &[
    Task { id: 1, title: "Complete project proposal", completed: false, due: "Today" },
    Task { id: 2, title: "Review client feedback", completed: true, due: "Yesterday" },
    Task { id: 3, title: "Schedule team meeting", completed: false, due: "Tomorrow" },
];

pub const SAMPLE_BUCKETS: &[Bucket] = &[
    Bucket { id: 1, name: "Work Projects", emoji: "💼", task_count: 8 },
    Bucket { id: 2, name: "Personal", emoji: "🏠", task_count: 3 },
    Bucket { id: 3, name: "Learning", emoji: "📚", task_count: 5 },
    Bucket { id: 4, name: "Health & Fitness", emoji: "💪", task_count: 2 },
];

pub const SAMPLE_SUMMARY: DashboardSummary = DashboardSummary { done_today: 2, open: 5, streak_days: 4 };
