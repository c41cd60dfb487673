//! Sparse task update payload.

use super::{Progress, Recurrence, SubtaskDraft, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Explicit optional-field update for one task.
///
/// Merge semantics are defined per field: a present field replaces the
/// aggregate's value, an absent field leaves it untouched. `due_date` and
/// `recurring` are doubly optional so an update can distinguish "leave as
/// is" (absent) from "clear" (present and null).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskUpdate {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Replacement due date; `Some(None)` clears it.
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement recurrence cadence; `Some(None)` clears it.
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurring: Option<Option<Recurrence>>,
    /// Replacement workflow status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Replacement completion percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    /// Full replacement for the embedded subtasks; existing subtasks are
    /// deleted and the payload recreated, never merged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<SubtaskDraft>>,
}

impl TaskUpdate {
    /// Shorthand for a single-field status move, as issued by board drags.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Shorthand for a single-field due-date move, as issued by calendar
    /// drags.
    #[must_use]
    pub fn due_date(due_date: DateTime<Utc>) -> Self {
        Self {
            due_date: Some(Some(due_date)),
            ..Self::default()
        }
    }

    /// Returns whether the update carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.recurring.is_none()
            && self.status.is_none()
            && self.progress.is_none()
            && self.subtasks.is_none()
    }
}

/// Deserializes a field so that an explicit `null` becomes `Some(None)`
/// while an absent field stays `None` via the container default.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
