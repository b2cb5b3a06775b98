//! HTTP boundary for the task API.
//!
//! Maps verbs and paths under `/api/v1` to the task service, wraps every
//! response in the standard envelope, and applies the ambient middleware
//! (request logging, rate limiting, CORS, body size limit) once at the
//! boundary.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware as axum_middleware;
use axum::routing::get;
use thiserror::Error;
use tower_http::cors::CorsLayer;

pub use state::AppState;

/// Maximum accepted JSON body size in bytes.
const BODY_LIMIT_BYTES: usize = 10 * 1024;

/// Errors raised while assembling the router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The configured CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

/// Builds the application router with all routes and middleware attached.
///
/// # Errors
///
/// Returns [`RouterError::InvalidCorsOrigin`] when the configured origin
/// cannot be used as a header value.
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router, RouterError> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .map_err(|_| RouterError::InvalidCorsOrigin(cors_origin.to_owned()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = Router::new()
        .route("/api/v1/status", get(handlers::server_status))
        .route(
            "/api/v1/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/api/v1/tasks/{task_id}",
            get(handlers::get_task)
                .put(handlers::update_task_details)
                .patch(handlers::update_task_status)
                .delete(handlers::delete_task),
        )
        .fallback(handlers::route_fallback)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::enforce,
        ))
        .layer(axum_middleware::from_fn(
            middleware::request_log::log_requests,
        ))
        .with_state(state);

    Ok(router)
}
