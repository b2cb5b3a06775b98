//! Wire-level request payloads accepted by the task API.
//!
//! Fields are deliberately loose (`Option<String>`) so that malformed enum
//! values or dates surface as field-level validation errors rather than
//! deserialization failures.

use serde::Deserialize;

/// Payload for `POST /api/v1/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    /// Task title; required and non-empty.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description; required and non-empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional initial status; must be `pending` or `completed`.
    #[serde(default)]
    pub status: Option<String>,
    /// Optional category; must be `personal`, `work`, or `idea`.
    #[serde(default)]
    pub category: Option<String>,
    /// Optional RFC 3339 due date.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Payload for `PUT /api/v1/tasks/{taskId}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskDetailsPayload {
    /// Replacement description; non-empty when present.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement category; valid enum value when present.
    #[serde(default)]
    pub category: Option<String>,
    /// Replacement RFC 3339 due date; `null` leaves the stored value
    /// untouched.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Payload for `PATCH /api/v1/tasks/{taskId}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusPayload {
    /// New status; required and must be `pending` or `completed`.
    #[serde(default)]
    pub status: Option<String>,
}
