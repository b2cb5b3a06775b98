//! Shared state handed to every request handler.

use std::sync::Arc;
use std::time::Instant;

use super::middleware::rate_limit::FixedWindowLimiter;
use crate::task::services::TaskService;

/// Application state shared across the router.
#[derive(Clone)]
pub struct AppState {
    /// Task rule engine.
    pub service: TaskService,
    /// Fixed-window request limiter.
    pub limiter: Arc<FixedWindowLimiter>,
    /// Process start time for the health probe.
    pub started_at: Instant,
}

impl AppState {
    /// Creates application state from its collaborators.
    #[must_use]
    pub fn new(service: TaskService, limiter: Arc<FixedWindowLimiter>) -> Self {
        Self {
            service,
            limiter,
            started_at: Instant::now(),
        }
    }
}
