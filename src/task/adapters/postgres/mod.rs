//! `PostgreSQL` adapters for task persistence.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool, build_pool};
