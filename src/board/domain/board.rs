//! Board aggregate root and its columns.

use super::{BoardDomainError, BoardId, ColumnId};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Column names every new board starts with, in render order.
pub const DEFAULT_COLUMN_NAMES: [&str; 4] = ["To Do", "In Progress", "Review", "Done"];

/// Named, ordered grouping bucket on a board.
///
/// Columns do not own tasks; membership is computed by filtering the task
/// collection. The column name doubles as the container lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    order: u32,
}

impl Column {
    /// Creates a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>, order: u32) -> Result<Self, BoardDomainError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(BoardDomainError::EmptyColumnName);
        }
        Ok(Self {
            id: ColumnId::new(),
            name: value,
            order,
        })
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the render order.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }
}

/// Board aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    name: String,
    description: String,
    owner_id: UserId,
    member_ids: Vec<UserId>,
    columns: Vec<Column>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board with the default four columns. The owner is also
    /// recorded as a member.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] when the name is empty
    /// after trimming.
    pub fn create(draft: BoardDraft, owner_id: UserId, clock: &(impl Clock + ?Sized)) -> Result<Self, BoardDomainError> {
        let BoardDraft { name, description } = draft;
        if name.trim().is_empty() {
            return Err(BoardDomainError::EmptyBoardName);
        }

        let columns = (0u32..)
            .zip(DEFAULT_COLUMN_NAMES)
            .map(|(order, column_name)| Column::new(column_name, order))
            .collect::<Result<Vec<_>, _>>()?;

        let timestamp = clock.utc();
        Ok(Self {
            id: BoardId::new(),
            name,
            description,
            owner_id,
            member_ids: vec![owner_id],
            columns,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the member identifiers.
    #[must_use]
    pub fn member_ids(&self) -> &[UserId] {
        &self.member_ids
    }

    /// Returns the columns in render order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the given user may read the board: the owner and
    /// every member may, nobody else.
    #[must_use]
    pub fn can_view(&self, user: UserId) -> bool {
        self.owner_id == user || self.member_ids.contains(&user)
    }

    /// Applies a sparse set of changes. Present fields replace, absent
    /// fields leave untouched; a membership replacement always retains the
    /// owner.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardName`] for an empty
    /// replacement name.
    pub fn apply_changes(
        &mut self,
        changes: BoardChanges,
        clock: &(impl Clock + ?Sized),
    ) -> Result<(), BoardDomainError> {
        if let Some(name) = &changes.name
            && name.trim().is_empty()
        {
            return Err(BoardDomainError::EmptyBoardName);
        }

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(member_ids) = changes.member_ids {
            let mut seen = HashSet::new();
            let mut members: Vec<UserId> = member_ids
                .into_iter()
                .filter(|member| seen.insert(*member))
                .collect();
            if !members.contains(&self.owner_id) {
                members.insert(0, self.owner_id);
            }
            self.member_ids = members;
        }
        self.updated_at = clock.utc();
        Ok(())
    }
}

/// Creation payload for a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDraft {
    /// Board name.
    pub name: String,
    /// Board description.
    #[serde(default)]
    pub description: String,
}

impl BoardDraft {
    /// Creates a draft.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Sparse change set for an existing board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardChanges {
    /// Replacement name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement membership; the owner is retained even when omitted from
    /// the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<UserId>>,
}
