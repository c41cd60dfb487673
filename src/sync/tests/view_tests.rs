//! View state tests: projections, filters, and single-entry patches.

use super::{mid_may_afternoon, task_due_at, task_in_status};
use crate::sync::containers::{ColumnMap, ContainerScheme};
use crate::sync::view::{TaskCollection, ViewFilter};
use crate::task::domain::{TaskId, TaskStatus};
use chrono::TimeZone;
use rstest::rstest;

fn board_scheme() -> ContainerScheme {
    ContainerScheme::Columns(ColumnMap::standard())
}

#[rstest]
fn projections_partition_by_container_in_fetch_order() {
    let mut collection = TaskCollection::new();
    collection.replace_all(vec![
        task_in_status("first todo", TaskStatus::Todo),
        task_in_status("doing", TaskStatus::InProgress),
        task_in_status("second todo", TaskStatus::Todo),
    ]);

    let scheme = board_scheme();
    let todo = collection.tasks_for_container(&scheme, "To Do");
    let titles: Vec<&str> = todo.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["first todo", "second todo"]);

    assert_eq!(collection.tasks_for_container(&scheme, "Done").len(), 0);
}

#[rstest]
fn patch_status_moves_exactly_one_task_between_projections() {
    let mover = task_in_status("mover", TaskStatus::Todo);
    let stayer = task_in_status("stayer", TaskStatus::Todo);
    let mover_id = mover.id().clone();
    let mut collection = TaskCollection::new();
    collection.replace_all(vec![mover, stayer]);

    assert!(collection.patch_status(&mover_id, TaskStatus::Done));

    let scheme = board_scheme();
    let done = collection.tasks_for_container(&scheme, "Done");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title(), "mover");
    let todo = collection.tasks_for_container(&scheme, "To Do");
    assert_eq!(todo.len(), 1);
    assert_eq!(todo[0].title(), "stayer");
}

#[rstest]
fn patch_of_unknown_id_touches_nothing() {
    let task = task_in_status("only", TaskStatus::Todo);
    let mut collection = TaskCollection::new();
    collection.replace_all(vec![task]);

    let absent = TaskId::parse("absent").expect("valid id");
    assert!(!collection.patch_status(&absent, TaskStatus::Done));
    assert_eq!(collection.tasks()[0].status(), TaskStatus::Todo);
}

#[rstest]
fn patch_due_date_moves_the_task_between_days() {
    let task = task_due_at("rescheduled", mid_may_afternoon());
    let id = task.id().clone();
    let mut collection = TaskCollection::new();
    collection.replace_all(vec![task]);

    let next_day = chrono::Utc
        .with_ymd_and_hms(2026, 5, 15, 0, 0, 0)
        .single()
        .expect("valid instant");
    assert!(collection.patch_due_date(&id, next_day));

    assert_eq!(
        collection
            .tasks_for_container(&ContainerScheme::Calendar, "2026-05-15")
            .len(),
        1
    );
    assert_eq!(
        collection
            .tasks_for_container(&ContainerScheme::Calendar, "2026-05-14")
            .len(),
        0
    );
}

#[rstest]
fn filters_hide_tasks_from_projections_without_mutating() {
    let mut collection = TaskCollection::new();
    collection.replace_all(vec![
        task_in_status("urgent fix", TaskStatus::Todo),
        task_in_status("routine chore", TaskStatus::Todo),
    ]);
    collection.set_filter(ViewFilter::none().with_search("URGENT"));

    let scheme = board_scheme();
    let visible = collection.tasks_for_container(&scheme, "To Do");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title(), "urgent fix");

    // The collection itself is untouched; only the projection narrows.
    assert_eq!(collection.tasks().len(), 2);
}

#[rstest]
fn status_filter_restricts_projections() {
    let mut collection = TaskCollection::new();
    collection.replace_all(vec![
        task_in_status("open", TaskStatus::Todo),
        task_in_status("closing", TaskStatus::Done),
    ]);
    collection.set_filter(ViewFilter::none().with_statuses(vec![TaskStatus::Done]));

    let scheme = board_scheme();
    assert_eq!(collection.tasks_for_container(&scheme, "To Do").len(), 0);
    assert_eq!(collection.tasks_for_container(&scheme, "Done").len(), 1);
}
