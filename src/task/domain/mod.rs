//! Domain model for task records.
//!
//! The task domain models the task aggregate, its status and category
//! enumerations, and the validated inputs used to create and mutate tasks,
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskCategoryError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{
    DEFAULT_DUE_DATE_OFFSET_DAYS, NewTaskData, PersistedTaskData, Task, TaskCategory,
    TaskDetailsPatch, TaskStatus,
};
