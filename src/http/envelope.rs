//! Standard response envelopes shared by every endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::task::validation::FieldError;

/// Success envelope: `{success: true, message, data?}`.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `true`.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Response payload, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Failure envelope: `{success: false, message, error?}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Human-readable failure description.
    pub message: String,
    /// Field-level error details, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<FieldError>>,
}

/// Builds a success response with the given status, message, and payload.
pub fn success<T: Serialize>(status: StatusCode, message: &str, data: Option<T>) -> Response {
    let body = SuccessEnvelope {
        success: true,
        message: message.to_owned(),
        data,
    };
    (status, Json(body)).into_response()
}

/// Builds a failure response with the given status, message, and optional
/// field errors.
pub fn failure(status: StatusCode, message: &str, error: Option<Vec<FieldError>>) -> Response {
    let body = ErrorEnvelope {
        success: false,
        message: message.to_owned(),
        error,
    };
    (status, Json(body)).into_response()
}
