//! Request handlers mapping HTTP verbs to the task service.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::System;

use super::envelope;
use super::error::ApiError;
use super::state::AppState;
use crate::task::domain::Task;
use crate::task::validation::{
    self, CreateTaskPayload, UpdateTaskDetailsPayload, UpdateTaskStatusPayload,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthReport {
    uptime_secs: u64,
    memory: MemoryReport,
    timestamp: DateTime<Utc>,
    version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MemoryReport {
    total_bytes: u64,
    used_bytes: u64,
}

/// `GET /api/v1/status` — health probe with uptime and memory statistics.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn server_status(State(state): State<AppState>) -> Response {
    let mut system = System::new();
    system.refresh_memory();

    let report = HealthReport {
        uptime_secs: state.started_at.elapsed().as_secs(),
        memory: MemoryReport {
            total_bytes: system.total_memory(),
            used_bytes: system.used_memory(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    };
    envelope::success(
        StatusCode::OK,
        "Server is up and running smoothly!",
        Some(report),
    )
}

/// `POST /api/v1/tasks` — validates and creates a task.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::malformed_body(rejection.body_text()))?;
    let data = validation::validate_create(&body).map_err(ApiError::validation)?;

    let task = state.service.create(data).await?;
    Ok(created(task))
}

/// `GET /api/v1/tasks` — lists every task.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Response, ApiError> {
    let tasks = state.service.list_all().await?;
    Ok(envelope::success(
        StatusCode::OK,
        "Tasks fetched successfully",
        Some(tasks),
    ))
}

/// `GET /api/v1/tasks/{taskId}` — fetches a single task.
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::validate_task_id(&task_id).map_err(ApiError::validation)?;
    let task = state.service.get_by_id(id).await?;
    Ok(fetched(task))
}

/// `PUT /api/v1/tasks/{taskId}` — applies a partial details update.
pub async fn update_task_details(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskDetailsPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = validation::validate_task_id(&task_id).map_err(ApiError::validation)?;
    let Json(body) =
        payload.map_err(|rejection| ApiError::malformed_body(rejection.body_text()))?;
    let patch = validation::validate_details_update(&body).map_err(ApiError::validation)?;

    let task = state.service.update_details(id, patch).await?;
    Ok(envelope::success(
        StatusCode::OK,
        "Task details updated successfully",
        Some(task),
    ))
}

/// `PATCH /api/v1/tasks/{taskId}` — transitions the task status.
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskStatusPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = validation::validate_task_id(&task_id).map_err(ApiError::validation)?;
    let Json(body) =
        payload.map_err(|rejection| ApiError::malformed_body(rejection.body_text()))?;
    let status = validation::validate_status_update(&body).map_err(ApiError::validation)?;

    let task = state.service.update_status(id, status).await?;
    Ok(envelope::success(
        StatusCode::OK,
        "Task status updated successfully",
        Some(task),
    ))
}

/// `DELETE /api/v1/tasks/{taskId}` — removes a task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::validate_task_id(&task_id).map_err(ApiError::validation)?;
    state.service.delete(id).await?;
    Ok(envelope::success::<Task>(
        StatusCode::OK,
        "Task deleted successfully",
        None,
    ))
}

/// Fallback for unknown routes; keeps the envelope invariant everywhere.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn route_fallback() -> ApiError {
    ApiError::route_not_found()
}

fn created(task: Task) -> Response {
    envelope::success(
        StatusCode::CREATED,
        "Task created successfully",
        Some(task),
    )
}

fn fetched(task: Task) -> Response {
    envelope::success(StatusCode::OK, "Task fetched successfully", Some(task))
}
