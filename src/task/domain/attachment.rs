//! File attachments recorded against a task.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an attachment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    /// Creates a new random attachment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an attachment identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for a file attached to a task. The file body itself lives with
/// an external upload collaborator; only the reference is modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    id: AttachmentId,
    name: String,
    url: String,
    #[serde(rename = "type")]
    media_type: String,
    task_id: TaskId,
    created_at: DateTime<Utc>,
}

impl Attachment {
    /// Records a new attachment against a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAttachmentName`] when the name is
    /// empty after trimming.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        media_type: impl Into<String>,
        task_id: TaskId,
        clock: &(impl Clock + ?Sized),
    ) -> Result<Self, TaskDomainError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(TaskDomainError::EmptyAttachmentName);
        }
        Ok(Self {
            id: AttachmentId::new(),
            name: value,
            url: url.into(),
            media_type: media_type.into(),
            task_id,
            created_at: clock.utc(),
        })
    }

    /// Returns the attachment identifier.
    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL the file is served from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the MIME type recorded at upload time.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the owning task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
