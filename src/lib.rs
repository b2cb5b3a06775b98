//! Taskdeck: a task management REST service.
//!
//! This crate provides a small HTTP API for creating, listing, updating,
//! and deleting task records, layered as routing → payload validation →
//! a rule-enforcing service → a pluggable store.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`task`]: Task domain, validation, store port, and service
//! - [`http`]: Router, handlers, envelopes, and middleware
//! - [`config`]: Environment-driven server configuration

pub mod config;
pub mod http;
pub mod task;
