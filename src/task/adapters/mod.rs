//! Concrete store implementations for task persistence.

pub mod memory;
pub mod postgres;
