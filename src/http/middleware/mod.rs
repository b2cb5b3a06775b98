//! Ambient middleware wrapping the task routes.

pub mod rate_limit;
pub mod request_log;
