//! Drag coordinator tests against a mocked remote store.
//!
//! Expectations are configured in call order: the preload fetch first,
//! then whatever the gesture under test is allowed to do. Any call without
//! an expectation fails the test, which is how "no write issued" is
//! asserted.

use super::{mid_may_afternoon, task_due_at, task_in_status};
use crate::sync::containers::{ColumnMap, ContainerScheme};
use crate::sync::drag::{DragCoordinator, DropOutcome, ViewSource};
use crate::sync::ports::{MockRemoteTaskStore, RemoteStoreError};
use crate::task::domain::{Task, TaskStatus};
use chrono::Timelike;
use std::sync::Arc;

fn board_scheme() -> ContainerScheme {
    ContainerScheme::Columns(ColumnMap::standard())
}

fn expect_fetch(store: &mut MockRemoteTaskStore, tasks: Vec<Task>) {
    store
        .expect_fetch_tasks()
        .times(1)
        .return_once(move || Ok(tasks));
}

async fn load(
    store: MockRemoteTaskStore,
    scheme: ContainerScheme,
) -> DragCoordinator<MockRemoteTaskStore> {
    let mut coordinator = DragCoordinator::new(Arc::new(store), ViewSource::OwnedTasks, scheme);
    coordinator.refresh().await.expect("initial fetch succeeds");
    coordinator
}

#[tokio::test(flavor = "multi_thread")]
async fn begin_drag_records_the_origin_container() {
    let task = task_in_status("picked up", TaskStatus::Review);
    let id = task.id().clone();
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag(id.as_str());

    let session = coordinator.session().expect("session created");
    assert_eq!(session.task_id(), &id);
    assert_eq!(session.origin(), Some("Review"));
    assert_eq!(session.hovered(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_id_never_becomes_draggable() {
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task_in_status("real", TaskStatus::Todo)]);
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag("   ");

    assert!(coordinator.session().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_never_becomes_draggable() {
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, Vec::new());
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag("nobody-home");

    assert!(coordinator.session().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn hover_tracks_and_clears_the_highlighted_container() {
    let task = task_in_status("gliding", TaskStatus::Todo);
    let id = task.id().clone();
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag(id.as_str());
    coordinator.hover(Some("Done"));
    assert_eq!(
        coordinator.session().expect("session").hovered(),
        Some("Done")
    );

    coordinator.hover(None);
    assert_eq!(coordinator.session().expect("session").hovered(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn drop_outside_any_zone_clears_state_and_mutates_nothing() {
    let task = task_in_status("floating", TaskStatus::Todo);
    let id = task.id().clone();
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag(id.as_str());
    let outcome = coordinator.end_drag(id.as_str(), None).await;

    assert_eq!(outcome, DropOutcome::NoTarget);
    assert!(coordinator.session().is_none());
    assert_eq!(
        coordinator.collection().find(&id).expect("still there").status(),
        TaskStatus::Todo
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_container_is_a_silent_no_op() {
    let task = task_in_status("stuck", TaskStatus::Todo);
    let id = task.id().clone();
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    let mut coordinator = load(store, board_scheme()).await;

    let outcome = coordinator.end_drag(id.as_str(), Some("Backlog")).await;

    assert_eq!(outcome, DropOutcome::UnknownContainer);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_back_on_the_origin_issues_no_write() {
    let task = task_in_status("settled", TaskStatus::InProgress);
    let id = task.id().clone();
    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag(id.as_str());
    let outcome = coordinator.end_drag(id.as_str(), Some("In Progress")).await;

    assert_eq!(outcome, DropOutcome::AlreadyInPlace);
    assert!(coordinator.session().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_drop_patches_one_task_and_persists_one_field() {
    let mover = task_in_status("mover", TaskStatus::Todo);
    let bystander = task_in_status("bystander", TaskStatus::Todo);
    let id = mover.id().clone();
    let expected_id = id.clone();
    let response = mover.clone();

    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![mover, bystander]);
    store
        .expect_update_task()
        .times(1)
        .withf(move |called_id, update| {
            *called_id == expected_id
                && update.status == Some(TaskStatus::Done)
                && update.title.is_none()
                && update.due_date.is_none()
                && update.subtasks.is_none()
        })
        .return_once(move |_, _| Ok(response));
    let mut coordinator = load(store, board_scheme()).await;

    coordinator.begin_drag(id.as_str());
    let outcome = coordinator.end_drag(id.as_str(), Some("Done")).await;

    assert_eq!(outcome, DropOutcome::Persisted);
    assert_eq!(
        coordinator.collection().find(&id).expect("present").status(),
        TaskStatus::Done
    );
    let untouched = coordinator
        .collection()
        .tasks()
        .iter()
        .find(|task| task.title() == "bystander")
        .expect("present");
    assert_eq!(untouched.status(), TaskStatus::Todo);
}

#[tokio::test(flavor = "multi_thread")]
async fn calendar_drop_moves_the_due_date_to_midnight_of_the_day() {
    let task = task_due_at("rescheduled", mid_may_afternoon());
    let id = task.id().clone();
    let response = task.clone();

    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    store
        .expect_update_task()
        .times(1)
        .withf(|_, update| {
            update
                .due_date
                .and_then(|inner| inner)
                .is_some_and(|due| due.date_naive().to_string() == "2026-05-20")
        })
        .return_once(move |_, _| Ok(response));
    let mut coordinator = load(store, ContainerScheme::Calendar).await;

    let outcome = coordinator.end_drag(id.as_str(), Some("2026-05-20")).await;

    assert_eq!(outcome, DropOutcome::Persisted);
    let due = coordinator
        .collection()
        .find(&id)
        .expect("present")
        .due_date()
        .expect("due date set");
    assert_eq!(due.date_naive().to_string(), "2026-05-20");
    assert_eq!(due.hour(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_write_is_recovered_by_adopting_the_authoritative_collection() {
    let task = task_in_status("reverted", TaskStatus::Todo);
    let id = task.id().clone();
    let authoritative = vec![task.clone()];

    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    store
        .expect_update_task()
        .times(1)
        .return_once(|_, _| Err(RemoteStoreError::Status(500)));
    store
        .expect_fetch_tasks()
        .times(1)
        .return_once(move || Ok(authoritative));
    let mut coordinator = load(store, board_scheme()).await;

    let outcome = coordinator.end_drag(id.as_str(), Some("Done")).await;

    assert_eq!(outcome, DropOutcome::RolledBack);
    assert_eq!(
        coordinator.collection().find(&id).expect("present").status(),
        TaskStatus::Todo
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_recovery_keeps_the_optimistic_patch() {
    let task = task_in_status("adrift", TaskStatus::Todo);
    let id = task.id().clone();

    let mut store = MockRemoteTaskStore::new();
    expect_fetch(&mut store, vec![task]);
    store
        .expect_update_task()
        .times(1)
        .return_once(|_, _| Err(RemoteStoreError::Status(500)));
    store
        .expect_fetch_tasks()
        .times(1)
        .return_once(|| Err(RemoteStoreError::Unauthorized));
    let mut coordinator = load(store, board_scheme()).await;

    let outcome = coordinator.end_drag(id.as_str(), Some("Done")).await;

    assert_eq!(outcome, DropOutcome::Desynced);
    assert_eq!(
        coordinator.collection().find(&id).expect("present").status(),
        TaskStatus::Done
    );
}
