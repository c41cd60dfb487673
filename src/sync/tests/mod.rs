//! Unit tests for the sync module.

mod drag_tests;
mod view_tests;

use crate::auth::domain::UserId;
use crate::board::domain::BoardId;
use crate::task::domain::{Task, TaskDraft, TaskStatus};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;

/// Builds a task in the given status for view and drag tests.
fn task_in_status(title: &str, status: TaskStatus) -> Task {
    let mut task = Task::create(TaskDraft::new(title, BoardId::new()), UserId::new(), &DefaultClock)
        .expect("valid draft");
    task.set_status(status);
    task
}

/// Builds a task due at the given instant.
fn task_due_at(title: &str, due: DateTime<Utc>) -> Task {
    let draft = TaskDraft::new(title, BoardId::new()).with_due_date(due);
    Task::create(draft, UserId::new(), &DefaultClock).expect("valid draft")
}

/// Fixed instant inside the civil day 2026-05-14.
fn mid_may_afternoon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 14, 15, 30, 0)
        .single()
        .expect("valid instant")
}
