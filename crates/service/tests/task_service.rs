//! Tests for `TaskService` against an in-memory repository.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use common::InMemoryTaskRepo;
use taskhub_core::error::CoreError;
use taskhub_core::task::{Domain, Priority, TaskInput};
use taskhub_core::validation::ValidationError;
use taskhub_service::TaskService;
use uuid::Uuid;

fn backlog_input(title: &str) -> TaskInput {
    TaskInput {
        title: title.to_string(),
        description: String::new(),
        priority: "high".to_string(),
        domain: "work".to_string(),
        project_id: None,
        uni_module_id: None,
        deadline: None,
        is_backlog: true,
        completed: false,
    }
}

fn setup() -> (Arc<InMemoryTaskRepo>, TaskService) {
    let repo = Arc::new(InMemoryTaskRepo::default());
    let service = TaskService::new(repo.clone());
    (repo, service)
}

// ---------------------------------------------------------------------------
// Validation gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backlog_task_with_deadline_is_rejected_before_write() {
    let (repo, service) = setup();
    let input = TaskInput {
        deadline: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        ..backlog_input("T")
    };

    let err = service.create_task(input).await.unwrap_err();

    assert_matches!(err, CoreError::Validation(ValidationError::BacklogWithDeadline));
    assert_eq!(repo.write_count(), 0);
}

#[tokio::test]
async fn update_runs_the_same_rules_as_create() {
    let (repo, service) = setup();
    let created = service.create_task(backlog_input("T")).await.unwrap();

    let err = service
        .update_task(
            created.task_id,
            TaskInput {
                is_backlog: false,
                ..backlog_input("T")
            },
        )
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Validation(ValidationError::MissingDeadline));
    assert_eq!(repo.write_count(), 1);
}

#[tokio::test]
async fn created_tasks_satisfy_backlog_deadline_exclusivity() {
    let (_repo, service) = setup();
    let deadline = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

    let backlog = service.create_task(backlog_input("A")).await.unwrap();
    let scheduled = service
        .create_task(TaskInput {
            deadline: Some(deadline),
            is_backlog: false,
            ..backlog_input("B")
        })
        .await
        .unwrap();

    for task in [backlog, scheduled] {
        assert!(task.is_backlog ^ task.deadline.is_some());
    }
}

// ---------------------------------------------------------------------------
// Identifier checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nil_id_is_rejected_for_every_id_operation() {
    let (repo, service) = setup();
    let nil = Uuid::nil();

    assert_matches!(
        service.get_task_by_id(nil).await,
        Err(CoreError::IdentifierRequired { entity: "task" })
    );
    assert_matches!(
        service.delete_task(nil).await,
        Err(CoreError::IdentifierRequired { .. })
    );
    assert_matches!(
        service.toggle_status(nil).await,
        Err(CoreError::IdentifierRequired { .. })
    );
    assert_matches!(
        service.update_task(nil, backlog_input("T")).await,
        Err(CoreError::IdentifierRequired { .. })
    );
    assert_eq!(repo.write_count(), 0);
}

// ---------------------------------------------------------------------------
// Pass-through behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_returns_the_same_task() {
    let (_repo, service) = setup();
    let created = service.create_task(backlog_input("Round trip")).await.unwrap();

    let fetched = service.get_task_by_id(created.task_id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.priority, Priority::High);
    assert_eq!(fetched.domain, Domain::Work);
}

#[tokio::test]
async fn missing_task_surfaces_row_not_found() {
    let (_repo, service) = setup();

    let err = service.get_task_by_id(Uuid::new_v4()).await.unwrap_err();

    assert_matches!(err, CoreError::Persistence { context: "failed to fetch task", .. });
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), sqlx::Error::RowNotFound.to_string());
}

#[tokio::test]
async fn update_of_missing_task_succeeds_with_no_effect() {
    let (repo, service) = setup();

    let result = service
        .update_task(Uuid::new_v4(), backlog_input("Ghost"))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(repo.tasks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn toggling_twice_restores_original_state() {
    let (_repo, service) = setup();
    let created = service.create_task(backlog_input("Flip")).await.unwrap();

    service.toggle_status(created.task_id).await.unwrap();
    assert!(service.get_task_by_id(created.task_id).await.unwrap().completed);

    service.toggle_status(created.task_id).await.unwrap();
    assert!(!service.get_task_by_id(created.task_id).await.unwrap().completed);
}

#[tokio::test]
async fn delete_and_toggle_ignore_missing_ids() {
    let (_repo, service) = setup();
    service.delete_task(Uuid::new_v4()).await.unwrap();
    service.toggle_status(Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn get_all_lists_created_tasks() {
    let (_repo, service) = setup();
    service.create_task(backlog_input("A")).await.unwrap();
    service.create_task(backlog_input("B")).await.unwrap();

    let tasks = service.get_all_tasks().await.unwrap();
    assert_eq!(tasks.len(), 2);
}
