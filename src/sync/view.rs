//! De-normalized view state for board and calendar rendering.
//!
//! The view owns one flat task collection. Container membership is derived
//! by filtering that collection on every call; per-container lists are
//! never kept as separate mutable state, which is what rules out the
//! two-copies-diverge failure mode.

use crate::sync::containers::ContainerScheme;
use crate::task::domain::{Task, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};

/// Optional narrowing applied when projecting tasks for rendering. Filters
/// never mutate the collection; they only hide tasks from projections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    statuses: Vec<TaskStatus>,
    priorities: Vec<TaskPriority>,
    search: String,
}

impl ViewFilter {
    /// A filter that hides nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Restricts projections to the given statuses. An empty list means no
    /// restriction.
    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    /// Restricts projections to the given priorities. An empty list means
    /// no restriction.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = TaskPriority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Restricts projections to tasks whose title or description contains
    /// the given text, case-insensitively. Empty means no restriction.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns whether the task passes the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&task.status()) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority()) {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = task.title().to_lowercase().contains(&needle);
            let in_description = task.description().to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }
        true
    }
}

/// Flat in-memory task collection a view renders from.
///
/// Mutated only from the driving event loop, either by whole-collection
/// replacement or by single-entry replace-by-id; interleaved asynchronous
/// continuations are the only concurrency, so no locking is involved.
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    filter: ViewFilter,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous collection entirely and adopts the server's
    /// response. Identity was already normalized when the payload was
    /// deserialized; nothing is re-coerced here or downstream.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Installs a projection filter.
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
    }

    /// Returns the full collection in fetch order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identity.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Projects the tasks belonging to one container, as a fresh sequence.
    ///
    /// Ordering follows the collection's own (fetch) order; there is no
    /// separately maintained per-container order.
    #[must_use]
    pub fn tasks_for_container(&self, scheme: &ContainerScheme, container_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task) && scheme.contains(container_id, task))
            .collect()
    }

    /// Replaces one task's status in place, leaving every other task
    /// untouched. Returns `false` when the id matches nothing.
    pub fn patch_status(&mut self, id: &TaskId, status: TaskStatus) -> bool {
        self.patch(id, |task| task.set_status(status))
    }

    /// Replaces one task's due date in place, leaving every other task
    /// untouched. Returns `false` when the id matches nothing.
    pub fn patch_due_date(&mut self, id: &TaskId, due_date: DateTime<Utc>) -> bool {
        self.patch(id, |task| task.set_due_date(Some(due_date)))
    }

    fn patch(&mut self, id: &TaskId, apply: impl FnOnce(&mut Task)) -> bool {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(apply)
            .is_some()
    }
}
