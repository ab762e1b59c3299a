//! Vendor to-do tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Still open.
    #[default]
    Pending,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Status after the vendor taps the toggle.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    /// Wire and display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Default priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl TaskPriority {
    /// Wire and display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A vendor task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Completion status.
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority.
    #[serde(default)]
    pub priority: TaskPriority,
    /// Due date as sent by the backend.
    #[serde(default)]
    pub due_date: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Tasks split the way the task screen shows them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    /// Open tasks.
    pub pending: Vec<Task>,
    /// Finished tasks.
    pub completed: Vec<Task>,
}

impl TaskBoard {
    /// Split `tasks` by status, preserving fetch order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let (pending, completed) = tasks
            .into_iter()
            .partition(|task| task.status == TaskStatus::Pending);
        Self { pending, completed }
    }
}

/// Validation errors for [`TaskDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskDraftError {
    /// Title was blank.
    #[error("Please enter a title")]
    MissingTitle,
    /// Due date was not `YYYY-MM-DD`.
    #[error("Due date must be formatted as YYYY-MM-DD")]
    InvalidDueDate,
}

/// Unvalidated task form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title, required.
    pub title: String,
    /// Description.
    pub description: String,
    /// Priority.
    pub priority: TaskPriority,
    /// Optional due date, `YYYY-MM-DD`.
    pub due_date: String,
}

/// Validated body of a task creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Owner vendor.
    pub vendor_id: RecordId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Priority.
    pub priority: TaskPriority,
    /// Due date, empty when not set.
    pub due_date: String,
}

impl TaskDraft {
    /// Validate the draft for `vendor_id`.
    pub fn validate(self, vendor_id: RecordId) -> Result<NewTask, TaskDraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskDraftError::MissingTitle);
        }
        let due_date = self.due_date.trim();
        if !due_date.is_empty() && NaiveDate::parse_from_str(due_date, "%Y-%m-%d").is_err() {
            return Err(TaskDraftError::InvalidDueDate);
        }
        Ok(NewTask {
            vendor_id,
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            priority: self.priority,
            due_date: due_date.to_owned(),
        })
    }
}

/// Body of a task status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdate {
    /// New status.
    pub status: TaskStatus,
    /// Owner vendor.
    pub vendor_id: RecordId,
}
