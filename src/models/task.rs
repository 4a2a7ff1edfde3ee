#[cfg(test)]
#[path = "task_test.rs"]
mod tests;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Task state as reported by the server. The set is open; unrecognized
/// values land in `Unknown` instead of failing the decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Running,
    Ready,
    Done,
    Failed,

    #[default]
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Active tasks are the ones worth surfacing first in compact layout.
    pub fn is_active(&self) -> bool {
        matches!(self, TaskStatus::Running | TaskStatus::Ready)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Running => "◐",
            TaskStatus::Ready => "○",
            TaskStatus::Done => "●",
            TaskStatus::Failed => "✗",
            TaskStatus::Unknown => "·",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TaskStatus::Running => Color::LightBlue,
            TaskStatus::Ready => Color::DarkGray,
            TaskStatus::Done => Color::Green,
            TaskStatus::Failed => Color::Red,
            TaskStatus::Unknown => Color::DarkGray,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Task {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}

/// An ordered set of tasks plus an overall status string, fetched as JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskList {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Index of the task shown in compact layout: the first running or ready
    /// task in list order, else the last task. None on an empty list.
    pub fn highlighted_index(&self) -> Option<usize> {
        if self.tasks.is_empty() {
            return None;
        }
        Some(
            self.tasks
                .iter()
                .position(|t| t.status.is_active())
                .unwrap_or(self.tasks.len() - 1),
        )
    }
}

/// Externally owned handle to a task list resource, carrying its absolute
/// URL. The session keeps these in creation order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TaskListRef {
    pub url: String,
}

impl TaskListRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
