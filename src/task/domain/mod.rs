//! Domain types for the task aggregate.

mod attachment;
mod error;
mod ids;
mod priority;
mod progress;
mod recurrence;
mod status;
mod subtask;
mod task;
mod update;

pub use attachment::{Attachment, AttachmentId};
pub use error::{
    ParseRecurrenceError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use progress::Progress;
pub use recurrence::Recurrence;
pub use status::TaskStatus;
pub use subtask::{Subtask, SubtaskDraft};
pub use task::{Task, TaskDraft};
pub use update::TaskUpdate;
