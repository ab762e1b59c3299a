//! Driven port for task endpoints.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{NewTask, RecordId, Task, TaskStatusUpdate};

/// Port for the backend's task resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Tasks owned by the vendor.
    async fn vendor_tasks(&self, vendor_id: &RecordId) -> Result<Vec<Task>, ApiError>;

    /// Create a task.
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError>;

    /// Change a task's status.
    async fn update_task_status(
        &self,
        task_id: &RecordId,
        update: &TaskStatusUpdate,
    ) -> Result<(), ApiError>;

    /// Delete a task owned by `vendor_id`.
    async fn delete_task(&self, task_id: &RecordId, vendor_id: &RecordId) -> Result<(), ApiError>;
}
