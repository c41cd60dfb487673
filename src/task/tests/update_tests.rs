//! Sparse-update semantics: per-field merges and the doubly optional
//! clearable fields.

use crate::auth::domain::UserId;
use crate::board::domain::BoardId;
use crate::task::domain::{
    Recurrence, SubtaskDraft, Task, TaskDomainError, TaskDraft, TaskStatus, TaskUpdate,
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn seeded_task(clock: &DefaultClock) -> Task {
    let draft = TaskDraft::new("Quarterly report", BoardId::new())
        .with_description("Collect the numbers")
        .with_due_date(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid"))
        .with_recurring(Recurrence::Monthly)
        .with_subtasks(vec![
            SubtaskDraft::new("gather data", true),
            SubtaskDraft::new("draft text", false),
        ]);
    Task::create(draft, UserId::new(), clock).expect("valid draft")
}

#[rstest]
fn absent_fields_deserialize_as_untouched() {
    let update: TaskUpdate = serde_json::from_str("{}").expect("valid payload");
    assert!(update.is_empty());
    assert_eq!(update.due_date, None);
}

#[rstest]
fn null_due_date_deserializes_as_explicit_clear() {
    let update: TaskUpdate = serde_json::from_str(r#"{"dueDate": null}"#).expect("valid payload");
    assert_eq!(update.due_date, Some(None));
    assert!(!update.is_empty());
}

#[rstest]
fn present_due_date_deserializes_as_replacement() {
    let update: TaskUpdate =
        serde_json::from_str(r#"{"dueDate": "2026-04-01T00:00:00Z"}"#).expect("valid payload");
    let expected = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).single().expect("valid");
    assert_eq!(update.due_date, Some(Some(expected)));
}

#[rstest]
fn single_field_update_serializes_only_that_field() {
    let wire = serde_json::to_string(&TaskUpdate::status(TaskStatus::Done)).expect("serializable");
    assert_eq!(wire, r#"{"status":"DONE"}"#);
}

#[rstest]
fn apply_leaves_absent_fields_untouched(clock: DefaultClock) {
    let mut task = seeded_task(&clock);
    let due_date = task.due_date();

    task.apply_update(TaskUpdate::status(TaskStatus::Review), &clock)
        .expect("valid update");

    assert_eq!(task.status(), TaskStatus::Review);
    assert_eq!(task.title(), "Quarterly report");
    assert_eq!(task.due_date(), due_date);
    assert_eq!(task.recurring(), Some(Recurrence::Monthly));
    assert_eq!(task.subtasks().len(), 2);
}

#[rstest]
fn apply_clears_due_date_and_recurrence_on_explicit_null(clock: DefaultClock) {
    let mut task = seeded_task(&clock);
    let update = TaskUpdate {
        due_date: Some(None),
        recurring: Some(None),
        ..TaskUpdate::default()
    };

    task.apply_update(update, &clock).expect("valid update");

    assert_eq!(task.due_date(), None);
    assert_eq!(task.recurring(), None);
}

#[rstest]
fn apply_replaces_subtasks_wholesale(clock: DefaultClock) {
    let mut task = seeded_task(&clock);
    let update = TaskUpdate {
        subtasks: Some(vec![SubtaskDraft::new("only survivor", false)]),
        ..TaskUpdate::default()
    };

    task.apply_update(update, &clock).expect("valid update");

    assert_eq!(task.subtasks().len(), 1);
    assert_eq!(task.subtasks()[0].title(), "only survivor");
}

#[rstest]
fn apply_rejects_blank_replacement_title_without_mutating(clock: DefaultClock) {
    let mut task = seeded_task(&clock);
    let updated_at = task.updated_at();
    let update = TaskUpdate {
        title: Some("   ".to_owned()),
        status: Some(TaskStatus::Done),
        ..TaskUpdate::default()
    };

    let result = task.apply_update(update, &clock);

    assert!(matches!(result, Err(TaskDomainError::EmptyTitle)));
    assert_eq!(task.title(), "Quarterly report");
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.updated_at(), updated_at);
}

#[rstest]
fn apply_rejects_blank_subtask_title_without_mutating(clock: DefaultClock) {
    let mut task = seeded_task(&clock);
    let update = TaskUpdate {
        subtasks: Some(vec![SubtaskDraft::new("  ", true)]),
        ..TaskUpdate::default()
    };

    let result = task.apply_update(update, &clock);

    assert!(matches!(result, Err(TaskDomainError::EmptySubtaskTitle)));
    assert_eq!(task.subtasks().len(), 2);
}
