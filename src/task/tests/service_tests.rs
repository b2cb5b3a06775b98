//! Service orchestration tests for the task rule engine.

use std::sync::Arc;

use super::fixtures::FixedClock;
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{
        DEFAULT_DUE_DATE_OFFSET_DAYS, NewTaskData, TaskCategory, TaskDetailsPatch, TaskId,
        TaskStatus,
    },
    ports::{MockTaskStore, TaskStoreError},
    services::{TaskService, TaskServiceError},
};
use chrono::Duration;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::reference()
}

#[fixture]
fn service(clock: FixedClock) -> TaskService {
    TaskService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(clock))
}

fn sample_input() -> NewTaskData {
    NewTaskData::new("Write report", "Quarterly numbers").expect("valid input")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_defaults_and_persists(service: TaskService, clock: FixedClock) {
    let created = service
        .create(sample_input())
        .await
        .expect("task creation should succeed");

    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.category(), TaskCategory::Personal);
    assert_eq!(
        created.due_date(),
        clock.0 + Duration::days(DEFAULT_DUE_DATE_OFFSET_DAYS)
    );

    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_completed_status_and_persists_nothing(service: TaskService) {
    let input = sample_input().with_status(TaskStatus::Completed);
    let result = service.create(input).await;

    assert_eq!(result, Err(TaskServiceError::CompletedOnCreate));

    let tasks = service.list_all().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_accepts_explicit_pending_status(service: TaskService) {
    let input = sample_input().with_status(TaskStatus::Pending);
    let created = service
        .create(input)
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_preserves_insertion_order(service: TaskService) {
    for title in ["first", "second", "third"] {
        let input = NewTaskData::new(title, "Ordering probe").expect("valid input");
        service
            .create(input)
            .await
            .expect("task creation should succeed");
    }

    let tasks = service.list_all().await.expect("listing should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_returns_not_found_when_missing(service: TaskService) {
    let result = service.get_by_id(TaskId::new()).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_details_applies_partial_patch(service: TaskService) {
    let created = service
        .create(sample_input())
        .await
        .expect("task creation should succeed");

    let patch = TaskDetailsPatch {
        description: Some("Quarterly numbers and forecast".to_owned()),
        ..TaskDetailsPatch::default()
    };
    let updated = service
        .update_details(created.id(), patch)
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), created.title());
    assert_eq!(updated.description(), "Quarterly numbers and forecast");
    assert_eq!(updated.category(), created.category());
    assert_eq!(updated.due_date(), created.due_date());

    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_details_returns_not_found_when_missing(service: TaskService) {
    let result = service
        .update_details(TaskId::new(), TaskDetailsPatch::default())
        .await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_get_yields_not_found(service: TaskService) {
    let created = service
        .create(sample_input())
        .await
        .expect("task creation should succeed");

    service
        .delete(created.id())
        .await
        .expect("delete should succeed");

    let result = service.get_by_id(created.id()).await;
    assert_eq!(result, Err(TaskServiceError::NotFound(created.id())));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn double_delete_yields_not_found(service: TaskService) {
    let created = service
        .create(sample_input())
        .await
        .expect("task creation should succeed");

    service
        .delete(created.id())
        .await
        .expect("first delete should succeed");
    let result = service.delete(created.id()).await;
    assert_eq!(result, Err(TaskServiceError::NotFound(created.id())));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_reclassifies_store_failure_as_unexpected(clock: FixedClock) {
    let mut store = MockTaskStore::new();
    store
        .expect_insert()
        .returning(|_| Err(TaskStoreError::persistence(std::io::Error::other("boom"))));
    let service = TaskService::new(Arc::new(store), Arc::new(clock));

    let result = service.create(sample_input()).await;
    assert_eq!(
        result,
        Err(TaskServiceError::Unexpected {
            action: "creating a new task"
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_reclassifies_store_failure_as_unexpected(clock: FixedClock) {
    let mut store = MockTaskStore::new();
    store
        .expect_list()
        .returning(|| Err(TaskStoreError::persistence(std::io::Error::other("boom"))));
    let service = TaskService::new(Arc::new(store), Arc::new(clock));

    let result = service.list_all().await;
    assert_eq!(
        result,
        Err(TaskServiceError::Unexpected {
            action: "fetching all tasks"
        })
    );
}
