//! Service layer enforcing task domain rules over a store port.

use crate::task::{
    domain::{NewTaskData, Task, TaskDetailsPatch, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
///
/// Every domain-rule violation is a distinct, non-retryable client error.
/// Store failures are re-classified as [`TaskServiceError::Unexpected`]
/// with the specific cause logged server-side only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskServiceError {
    /// A task may not start its life already completed.
    #[error("task cannot be created with a completed status")]
    CompletedOnCreate,

    /// A status update must change the stored value.
    #[error("task is already {0}")]
    StatusUnchanged(TaskStatus),

    /// No task exists for the given identifier.
    #[error("task not found")]
    NotFound(TaskId),

    /// Store or programming failure; the cause is logged, not exposed.
    #[error("an unexpected error occurred while {action}")]
    Unexpected {
        /// Operation description used in the client-facing message.
        action: &'static str,
    },
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task rule engine orchestrating validation, store access, and defaults.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskService {
    /// Creates a new task service.
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { store, clock }
    }

    /// Creates a task with defaults applied and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::CompletedOnCreate`] when the input asks
    /// for a completed task, or [`TaskServiceError::Unexpected`] when
    /// persistence fails.
    pub async fn create(&self, data: NewTaskData) -> TaskServiceResult<Task> {
        if data.status() == Some(TaskStatus::Completed) {
            tracing::error!("task with completed status can't be created");
            return Err(TaskServiceError::CompletedOnCreate);
        }

        let task = Task::new(data, &*self.clock);
        self.store
            .insert(&task)
            .await
            .map_err(store_failure("creating a new task"))?;
        tracing::info!(task_id = %task.id(), "new task created");
        Ok(task)
    }

    /// Returns every stored task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Unexpected`] when the store lookup fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self
            .store
            .list()
            .await
            .map_err(store_failure("fetching all tasks"))?;
        tracing::info!(count = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists for the
    /// identifier, or [`TaskServiceError::Unexpected`] when the store
    /// lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.store
            .find_by_id(id)
            .await
            .map_err(store_failure("fetching the task"))?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Applies a partial details update to an existing task.
    ///
    /// Fields absent from the patch are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists for the
    /// identifier, or [`TaskServiceError::Unexpected`] when persistence
    /// fails.
    pub async fn update_details(
        &self,
        id: TaskId,
        patch: TaskDetailsPatch,
    ) -> TaskServiceResult<Task> {
        let mut task = self.get_by_id(id).await.map_err(log_missing(id))?;
        task.apply_details(patch, &*self.clock);
        self.store
            .update(&task)
            .await
            .map_err(store_failure("updating the task"))?;
        tracing::info!(task_id = %id, "task details updated");
        Ok(task)
    }

    /// Transitions a task to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists for the
    /// identifier, [`TaskServiceError::StatusUnchanged`] when the stored
    /// status already equals the requested one, or
    /// [`TaskServiceError::Unexpected`] when persistence fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        new_status: TaskStatus,
    ) -> TaskServiceResult<Task> {
        let mut task = self.get_by_id(id).await.map_err(log_missing(id))?;

        if task.status() == new_status {
            tracing::error!(task_id = %id, status = %new_status, "task already in requested status");
            return Err(TaskServiceError::StatusUnchanged(new_status));
        }

        task.set_status(new_status, &*self.clock);
        self.store
            .update(&task)
            .await
            .map_err(store_failure("updating the task status"))?;
        tracing::info!(task_id = %id, status = %new_status, "task status updated");
        Ok(task)
    }

    /// Removes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists for the
    /// identifier, or [`TaskServiceError::Unexpected`] when persistence
    /// fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.store.delete(id).await.map_err(|err| match err {
            TaskStoreError::NotFound(missing) => {
                tracing::error!(task_id = %missing, "task doesn't exist");
                TaskServiceError::NotFound(missing)
            }
            other => store_failure("deleting the task")(other),
        })?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }
}

/// Re-classifies a store failure as an unexpected service error, logging
/// the underlying cause.
fn store_failure(action: &'static str) -> impl FnOnce(TaskStoreError) -> TaskServiceError {
    move |err| match err {
        TaskStoreError::NotFound(id) => TaskServiceError::NotFound(id),
        other => {
            tracing::error!(error = %other, "store failure while {action}");
            TaskServiceError::Unexpected { action }
        }
    }
}

/// Logs the not-found case before propagating a fetch error unchanged.
fn log_missing(id: TaskId) -> impl FnOnce(TaskServiceError) -> TaskServiceError {
    move |err| {
        if matches!(err, TaskServiceError::NotFound(_)) {
            tracing::error!(task_id = %id, "task doesn't exist");
        }
        err
    }
}
