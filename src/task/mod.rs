//! Task management for Taskdeck.
//!
//! This module implements the task record lifecycle: creation with
//! server-applied defaults, retrieval, partial detail updates, validated
//! status transitions, and deletion. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Payload validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Store implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
