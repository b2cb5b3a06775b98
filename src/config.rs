//! Environment-driven server configuration.
//!
//! Every setting can be supplied as a CLI flag or an environment variable,
//! with compiled defaults as the fallback.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};

/// Server configuration resolved from CLI arguments and the environment.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Taskdeck task management API server")]
pub struct ServerConfig {
    /// Port for the HTTP server to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allowed origin for CORS.
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,

    /// Rate limit window duration in milliseconds.
    #[arg(long, env = "RATE_LIMIT_WINDOW_MS", default_value_t = 600_000)]
    pub rate_limit_window_ms: u64,

    /// Maximum number of requests allowed per client in one window.
    #[arg(long, env = "RATE_LIMIT_MAX", default_value_t = 20)]
    pub rate_limit_max: u64,

    /// `PostgreSQL` connection string; the in-memory store is used when
    /// unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Returns the socket address the server binds to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}
