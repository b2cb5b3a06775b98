//! Fixed-window rate limiting keyed by client address.

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

use crate::http::error::ApiError;
use crate::http::state::AppState;

/// Fixed-window request counter per client.
///
/// A window opens on a client's first request and admits at most
/// `max_requests` until `window` has elapsed, at which point the next
/// request opens a fresh window.
pub struct FixedWindowLimiter {
    window: Duration,
    max_requests: u64,
    clock: Arc<dyn Clock + Send + Sync>,
    windows: Mutex<HashMap<Option<IpAddr>, WindowSlot>>,
}

#[derive(Debug, Clone, Copy)]
struct WindowSlot {
    opened_at: DateTime<Utc>,
    count: u64,
}

impl FixedWindowLimiter {
    /// Creates a limiter admitting `max_requests` per `window_ms` window.
    #[must_use]
    pub fn new(window_ms: u64, max_requests: u64, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let millis = i64::try_from(window_ms).unwrap_or(i64::MAX);
        Self {
            window: Duration::milliseconds(millis),
            max_requests,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request for `client` and returns whether it is admitted.
    ///
    /// Clients without a known peer address share a single process-wide
    /// window. A poisoned lock fails open. Whenever a client's window
    /// rolls over, windows of clients that have gone quiet for a full
    /// window are evicted so the map stays bounded.
    pub fn try_acquire(&self, client: Option<IpAddr>) -> bool {
        let now = self.clock.utc();
        let Ok(mut windows) = self.windows.lock() else {
            tracing::warn!("rate limiter lock poisoned; admitting request");
            return true;
        };

        let mut rolled_over = false;
        let admitted = {
            let slot = windows.entry(client).or_insert(WindowSlot {
                opened_at: now,
                count: 0,
            });
            if now - slot.opened_at >= self.window {
                slot.opened_at = now;
                slot.count = 0;
                rolled_over = true;
            }
            if slot.count >= self.max_requests {
                false
            } else {
                slot.count += 1;
                true
            }
        };

        if rolled_over {
            windows.retain(|_, slot| now - slot.opened_at < self.window);
        }
        admitted
    }

    /// Returns the number of client windows currently tracked.
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().map(|windows| windows.len()).unwrap_or(0)
    }
}

/// Middleware rejecting requests over the configured rate with a 429.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    if state.limiter.try_acquire(client) {
        next.run(request).await
    } else {
        tracing::warn!(client = ?client, "rate limit exceeded");
        ApiError::rate_limited().into_response()
    }
}
