//! Structural validation of inbound task payloads.
//!
//! Validators run at the boundary, before any domain logic, and produce
//! either the typed service input or a structured list of
//! `{field, message}` pairs.

mod payloads;
mod rules;

pub use payloads::{CreateTaskPayload, UpdateTaskDetailsPayload, UpdateTaskStatusPayload};
pub use rules::{
    FieldError, ValidationResult, validate_create, validate_details_update, validate_status_update,
    validate_task_id,
};
