//! Boundary mapping from service and validation failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::envelope;
use crate::task::services::TaskServiceError;
use crate::task::validation::FieldError;

/// Fixed client-facing message accompanying validation failures.
const VALIDATION_MESSAGE: &str = "Validation Error";

/// Fixed client-facing message returned when the rate limit is exceeded.
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later";

/// A client-facing API failure carrying exactly one response path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    details: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Wraps schema-validation field errors in a 400 response.
    #[must_use]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: VALIDATION_MESSAGE.to_owned(),
            details: Some(errors),
        }
    }

    /// Wraps a body deserialization failure in a 400 response.
    #[must_use]
    pub fn malformed_body(reason: String) -> Self {
        Self::validation(vec![FieldError::new("body", reason)])
    }

    /// Builds the fixed 429 rate-limit response.
    #[must_use]
    pub fn rate_limited() -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: RATE_LIMIT_MESSAGE.to_owned(),
            details: None,
        }
    }

    /// Builds a 404 response for unknown routes.
    #[must_use]
    pub fn route_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Resource not found".to_owned(),
            details: None,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        let status = match err {
            TaskServiceError::CompletedOnCreate | TaskServiceError::StatusUnchanged(_) => {
                StatusCode::BAD_REQUEST
            }
            TaskServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskServiceError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        envelope::failure(self.status, &self.message, self.details)
    }
}
