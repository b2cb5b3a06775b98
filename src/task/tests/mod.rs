//! Unit tests for the task module.

mod domain_tests;
mod fixtures;
mod service_tests;
