//! Container identity and the total mapping between containers and task
//! fields.
//!
//! A container is a UI grouping bucket: a named board column or a calendar
//! day keyed by an ISO date. Each container the UI renders must map to
//! exactly one task field value and back; a container id that resolves to
//! nothing makes the drop a silent no-op rather than a partial move.

use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Format calendar containers are keyed by.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Field value a drop resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Move the task to a board column's status.
    Status(TaskStatus),
    /// Move the task's due date to a calendar day.
    DueDate(NaiveDate),
}

/// Errors returned while constructing a column map.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnMapError {
    /// Two columns share a name, so the name no longer identifies a status.
    #[error("duplicate column name: {0}")]
    DuplicateName(String),
    /// Two columns map to the same status, so the inverse mapping is lost.
    #[error("duplicate status mapping: {0}")]
    DuplicateStatus(TaskStatus),
}

/// Bijective mapping between board column names and task statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    entries: Vec<(String, TaskStatus)>,
}

impl ColumnMap {
    /// Creates a map after checking both directions are unambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnMapError`] when a name or a status appears twice.
    pub fn new(
        entries: impl IntoIterator<Item = (String, TaskStatus)>,
    ) -> Result<Self, ColumnMapError> {
        let collected: Vec<(String, TaskStatus)> = entries.into_iter().collect();
        for (index, (name, status)) in collected.iter().enumerate() {
            for (other_name, other_status) in collected.iter().skip(index + 1) {
                if name == other_name {
                    return Err(ColumnMapError::DuplicateName(name.clone()));
                }
                if status == other_status {
                    return Err(ColumnMapError::DuplicateStatus(*status));
                }
            }
        }
        Ok(Self { entries: collected })
    }

    /// The standard four-column board layout.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ("To Do".to_owned(), TaskStatus::Todo),
                ("In Progress".to_owned(), TaskStatus::InProgress),
                ("Review".to_owned(), TaskStatus::Review),
                ("Done".to_owned(), TaskStatus::Done),
            ],
        }
    }

    /// Resolves a column name to its status.
    #[must_use]
    pub fn status_of(&self, column_name: &str) -> Option<TaskStatus> {
        self.entries
            .iter()
            .find(|(name, _)| name == column_name)
            .map(|(_, status)| *status)
    }

    /// Resolves a status to its column name.
    #[must_use]
    pub fn column_of(&self, status: TaskStatus) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, mapped)| *mapped == status)
            .map(|(name, _)| name.as_str())
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// The container scheme a view renders: named status columns or calendar
/// days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerScheme {
    /// Board view: containers are named columns mapped to statuses.
    Columns(ColumnMap),
    /// Calendar view: containers are days keyed by ISO dates.
    Calendar,
}

impl ContainerScheme {
    /// Resolves a container id to the field value a drop there produces.
    ///
    /// Returns `None` for an unknown column name or an unparseable date;
    /// the caller treats that as "dropped outside any valid zone".
    #[must_use]
    pub fn resolve(&self, container_id: &str) -> Option<DropTarget> {
        match self {
            Self::Columns(map) => map.status_of(container_id).map(DropTarget::Status),
            Self::Calendar => NaiveDate::parse_from_str(container_id, ISO_DATE_FORMAT)
                .ok()
                .map(DropTarget::DueDate),
        }
    }

    /// Derives the container a task currently lives in, via the inverse
    /// mapping: status to column name, or due date to ISO day key.
    ///
    /// Returns `None` when the task has no container in this scheme (no
    /// due date on a calendar, or a status with no mapped column).
    #[must_use]
    pub fn origin_of(&self, task: &Task) -> Option<String> {
        match self {
            Self::Columns(map) => map.column_of(task.status()).map(str::to_owned),
            Self::Calendar => task
                .due_date()
                .map(|due| due.date_naive().format(ISO_DATE_FORMAT).to_string()),
        }
    }

    /// Returns whether the task belongs to the given container.
    ///
    /// Column membership is status equality; calendar membership compares
    /// the civil date only, ignoring the time of day.
    #[must_use]
    pub fn contains(&self, container_id: &str, task: &Task) -> bool {
        match self.resolve(container_id) {
            Some(DropTarget::Status(status)) => task.status() == status,
            Some(DropTarget::DueDate(date)) => task
                .due_date()
                .is_some_and(|due| same_civil_day(due, date)),
            None => false,
        }
    }
}

/// Compares a timestamp against a calendar day by civil date alone.
fn same_civil_day(due: DateTime<Utc>, date: NaiveDate) -> bool {
    due.date_naive() == date
}
