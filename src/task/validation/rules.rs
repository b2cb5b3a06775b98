//! Pure validation rules for inbound task payloads.
//!
//! Each validator checks every field and reports the full list of
//! field-level errors, or produces the typed input the service layer
//! consumes. No validator touches the store.

use super::payloads::{CreateTaskPayload, UpdateTaskDetailsPayload, UpdateTaskStatusPayload};
use crate::task::domain::{NewTaskData, TaskCategory, TaskDetailsPatch, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Offending payload field.
    pub field: String,
    /// Human-readable failure message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for payload validators.
pub type ValidationResult<T> = Result<T, Vec<FieldError>>;

/// Validates a task creation payload and produces the typed input.
///
/// # Errors
///
/// Returns the full list of field errors when any field is missing,
/// empty, or holds an illegal value.
pub fn validate_create(payload: &CreateTaskPayload) -> ValidationResult<NewTaskData> {
    let mut errors = Vec::new();

    let title = trimmed(payload.title.as_deref());
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    let description = trimmed(payload.description.as_deref());
    if description.is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }
    let status = parse_status(payload.status.as_deref(), &mut errors);
    let category = parse_category(payload.category.as_deref(), &mut errors);
    let due_date = parse_due_date(payload.due_date.as_deref(), &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut data = NewTaskData::new(title, description)
        .map_err(|err| vec![FieldError::new("body", err.to_string())])?;
    if let Some(status) = status {
        data = data.with_status(status);
    }
    if let Some(category) = category {
        data = data.with_category(category);
    }
    if let Some(due_date) = due_date {
        data = data.with_due_date(due_date);
    }
    Ok(data)
}

/// Validates a details-update payload and produces the typed patch.
///
/// All fields are optional; present fields must satisfy the same per-field
/// constraints as creation. A JSON `null` due date is treated as absent.
///
/// # Errors
///
/// Returns the full list of field errors when any present field holds an
/// illegal value.
pub fn validate_details_update(
    payload: &UpdateTaskDetailsPayload,
) -> ValidationResult<TaskDetailsPatch> {
    let mut errors = Vec::new();

    let description = match payload.description.as_deref() {
        Some(raw) if raw.trim().is_empty() => {
            errors.push(FieldError::new("description", "Description is required"));
            None
        }
        Some(raw) => Some(raw.trim().to_owned()),
        None => None,
    };
    let category = parse_category(payload.category.as_deref(), &mut errors);
    let due_date = parse_due_date(payload.due_date.as_deref(), &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TaskDetailsPatch {
        description,
        category,
        due_date,
    })
}

/// Validates a status-update payload.
///
/// # Errors
///
/// Returns a field error when the status is missing or not a legal enum
/// value.
pub fn validate_status_update(payload: &UpdateTaskStatusPayload) -> ValidationResult<TaskStatus> {
    let invalid = || vec![FieldError::new("status", "Invalid status value")];
    let raw = payload.status.as_deref().ok_or_else(invalid)?;
    TaskStatus::try_from(raw).map_err(|_| invalid())
}

/// Validates a path identifier against the store's identifier format.
///
/// # Errors
///
/// Returns a field error when the identifier is not a well-formed UUID.
pub fn validate_task_id(raw: &str) -> ValidationResult<TaskId> {
    TaskId::from_str(raw).map_err(|_| vec![FieldError::new("taskId", "Invalid task id")])
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

fn parse_status(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<TaskStatus> {
    let value = raw?;
    match TaskStatus::try_from(value) {
        Ok(status) => Some(status),
        Err(_) => {
            errors.push(FieldError::new("status", "Invalid status value"));
            None
        }
    }
}

fn parse_category(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<TaskCategory> {
    let value = raw?;
    match TaskCategory::try_from(value) {
        Ok(category) => Some(category),
        Err(_) => {
            errors.push(FieldError::new("category", "Invalid category value"));
            None
        }
    }
}

fn parse_due_date(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<DateTime<Utc>> {
    let value = raw?;
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(_) => {
            errors.push(FieldError::new("dueDate", "Invalid due date"));
            None
        }
    }
}
