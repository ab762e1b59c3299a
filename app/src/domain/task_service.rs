//! Tasks screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::TaskApi;
use super::{DomainError, RecordId, TaskBoard, TaskDraft, TaskStatusUpdate};

const LOAD_FAILED: &str = "Failed to load tasks";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETE_FAILED: &str = "Failed to delete task";

/// Manages the vendor's to-do list.
#[derive(Clone)]
pub struct TaskService<T> {
    tasks: Arc<T>,
}

impl<T> TaskService<T> {
    /// Create the service.
    pub fn new(tasks: Arc<T>) -> Self {
        Self { tasks }
    }
}

impl<T> TaskService<T>
where
    T: TaskApi,
{
    /// Fetch tasks split into pending and completed.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<TaskBoard, DomainError> {
        let tasks = self.tasks.vendor_tasks(vendor_id).await.map_err(|err| {
            warn!(error = %err, vendor_id = %vendor_id, "loading tasks failed");
            err.into_domain(LOAD_FAILED)
        })?;
        Ok(TaskBoard::from_tasks(tasks))
    }

    /// Validate and create a task, then reload.
    pub async fn create(
        &self,
        vendor_id: &RecordId,
        draft: TaskDraft,
    ) -> Result<TaskBoard, DomainError> {
        let task = draft
            .validate(vendor_id.clone())
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;
        self.tasks.create_task(&task).await.map_err(|err| {
            warn!(error = %err, "creating task failed");
            err.into_domain(CREATE_FAILED)
        })?;
        info!(vendor_id = %vendor_id, title = %task.title, "task created");
        self.load(vendor_id).await
    }

    /// Flip a task between pending and completed, then reload.
    pub async fn toggle(
        &self,
        vendor_id: &RecordId,
        task_id: &RecordId,
    ) -> Result<TaskBoard, DomainError> {
        let board = self.load(vendor_id).await?;
        let task = board
            .pending
            .iter()
            .chain(board.completed.iter())
            .find(|task| &task.id == task_id)
            .ok_or_else(|| DomainError::not_found(format!("Task {task_id} not found")))?;
        let update = TaskStatusUpdate {
            status: task.status.toggled(),
            vendor_id: vendor_id.clone(),
        };
        self.tasks
            .update_task_status(task_id, &update)
            .await
            .map_err(|err| {
                warn!(error = %err, task_id = %task_id, "task update failed");
                err.into_domain(UPDATE_FAILED)
            })?;
        info!(task_id = %task_id, status = update.status.as_str(), "task status changed");
        self.load(vendor_id).await
    }

    /// Delete a task and reload.
    pub async fn delete(
        &self,
        vendor_id: &RecordId,
        task_id: &RecordId,
    ) -> Result<TaskBoard, DomainError> {
        self.tasks
            .delete_task(task_id, vendor_id)
            .await
            .map_err(|err| {
                warn!(error = %err, task_id = %task_id, "deleting task failed");
                err.into_domain(DELETE_FAILED)
            })?;
        info!(task_id = %task_id, "task deleted");
        self.load(vendor_id).await
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
