//! Domain-focused tests for the task aggregate and its field types.

use super::fixtures::FixedClock;
use crate::task::domain::{
    DEFAULT_DUE_DATE_OFFSET_DAYS, NewTaskData, Task, TaskCategory, TaskDetailsPatch,
    TaskDomainError, TaskId, TaskStatus,
};
use chrono::Duration;
use rstest::{fixture, rstest};
use std::str::FromStr;

#[fixture]
fn clock() -> FixedClock {
    FixedClock::reference()
}

#[rstest]
fn new_task_data_rejects_empty_title() {
    let result = NewTaskData::new("   ", "Some description");
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn new_task_data_rejects_empty_description() {
    let result = NewTaskData::new("Write report", "\t\n");
    assert_eq!(result, Err(TaskDomainError::EmptyDescription));
}

#[rstest]
fn new_task_data_trims_fields(clock: FixedClock) {
    let data = NewTaskData::new("  Write report  ", " Quarterly numbers ").expect("valid input");
    let task = Task::new(data, &clock);

    assert_eq!(task.title(), "Write report");
    assert_eq!(task.description(), "Quarterly numbers");
}

#[rstest]
fn task_new_applies_documented_defaults(clock: FixedClock) {
    let data = NewTaskData::new("Write report", "Quarterly numbers").expect("valid input");
    let task = Task::new(data, &clock);

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.category(), TaskCategory::Personal);
    assert_eq!(task.created_at(), clock.0);
    assert_eq!(task.updated_at(), clock.0);
    assert_eq!(
        task.due_date(),
        clock.0 + Duration::days(DEFAULT_DUE_DATE_OFFSET_DAYS)
    );
}

#[rstest]
fn task_new_honours_explicit_fields(clock: FixedClock) {
    let due = clock.0 + Duration::days(2);
    let data = NewTaskData::new("Plan offsite", "Book the venue")
        .expect("valid input")
        .with_status(TaskStatus::Pending)
        .with_category(TaskCategory::Work)
        .with_due_date(due);
    let task = Task::new(data, &clock);

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.category(), TaskCategory::Work);
    assert_eq!(task.due_date(), due);
}

#[rstest]
#[case("pending", TaskStatus::Pending)]
#[case("completed", TaskStatus::Completed)]
#[case("  Completed  ", TaskStatus::Completed)]
fn task_status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn task_status_rejects_unknown_values() {
    assert!(TaskStatus::try_from("archived").is_err());
}

#[rstest]
#[case("personal", TaskCategory::Personal)]
#[case("work", TaskCategory::Work)]
#[case("idea", TaskCategory::Idea)]
fn task_category_parses_known_values(#[case] raw: &str, #[case] expected: TaskCategory) {
    assert_eq!(TaskCategory::try_from(raw), Ok(expected));
}

#[rstest]
fn task_category_rejects_unknown_values() {
    assert!(TaskCategory::try_from("hobby").is_err());
}

#[rstest]
fn apply_details_changes_only_present_fields(clock: FixedClock) {
    let data = NewTaskData::new("Write report", "Quarterly numbers").expect("valid input");
    let mut task = Task::new(data, &clock);
    let original_due = task.due_date();

    let later = clock.advanced_by_secs(90);
    task.apply_details(
        TaskDetailsPatch {
            description: Some("Quarterly numbers and forecast".to_owned()),
            ..TaskDetailsPatch::default()
        },
        &later,
    );

    assert_eq!(task.title(), "Write report");
    assert_eq!(task.description(), "Quarterly numbers and forecast");
    assert_eq!(task.category(), TaskCategory::Personal);
    assert_eq!(task.due_date(), original_due);
    assert_eq!(task.created_at(), clock.0);
    assert_eq!(task.updated_at(), later.0);
}

#[rstest]
fn apply_details_with_empty_patch_leaves_timestamps_alone(clock: FixedClock) {
    let data = NewTaskData::new("Write report", "Quarterly numbers").expect("valid input");
    let mut task = Task::new(data, &clock);

    let later = clock.advanced_by_secs(90);
    task.apply_details(TaskDetailsPatch::default(), &later);

    assert_eq!(task.updated_at(), clock.0);
}

#[rstest]
fn set_status_bumps_updated_at(clock: FixedClock) {
    let data = NewTaskData::new("Write report", "Quarterly numbers").expect("valid input");
    let mut task = Task::new(data, &clock);

    let later = clock.advanced_by_secs(30);
    task.set_status(TaskStatus::Completed, &later);

    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.updated_at(), later.0);
}

#[rstest]
fn task_id_parses_well_formed_uuid() {
    let id = TaskId::new();
    let parsed = TaskId::from_str(&id.to_string()).expect("round-trip parse");
    assert_eq!(parsed, id);
}

#[rstest]
fn task_id_rejects_malformed_input() {
    let result = TaskId::from_str("not-a-uuid");
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidTaskId("not-a-uuid".to_owned()))
    );
}

#[rstest]
fn task_serializes_with_camel_case_keys(clock: FixedClock) {
    let data = NewTaskData::new("Write report", "Quarterly numbers").expect("valid input");
    let task = Task::new(data, &clock);

    let value = serde_json::to_value(&task).expect("serializable task");
    let object = value.as_object().expect("JSON object");

    assert!(object.contains_key("dueDate"));
    assert!(object.contains_key("createdAt"));
    assert!(object.contains_key("updatedAt"));
    assert_eq!(
        object.get("status").and_then(serde_json::Value::as_str),
        Some("pending")
    );
    assert_eq!(
        object.get("category").and_then(serde_json::Value::as_str),
        Some("personal")
    );
}
