//! Drag coordinator: pointer gestures become single-field task mutations.
//!
//! A drop is applied optimistically to the local collection and then
//! persisted through the remote store; a failed write is recovered by
//! re-fetching the authoritative collection rather than inverting the
//! patch.
//!
//! Overlapping drags are a known race, kept rather than serialized: a
//! second drag may start while the first write is in flight, both patches
//! apply to the shared collection in call order, and a failure of the
//! first write triggers a full re-fetch that also discards the second
//! drag's optimistic patch until its own write lands. Superseding
//! re-fetches resolve last-write-wins.

use crate::board::domain::BoardId;
use crate::sync::containers::{ContainerScheme, DropTarget};
use crate::sync::ports::{RemoteStoreResult, RemoteTaskStore};
use crate::sync::view::{TaskCollection, ViewFilter};
use crate::task::domain::{TaskId, TaskUpdate};
use chrono::NaiveTime;
use std::sync::Arc;

/// Where the coordinator re-fetches its collection from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSource {
    /// One board's tasks, as rendered by the board view.
    Board(BoardId),
    /// Every task the session owns, as rendered by the calendar view.
    OwnedTasks,
}

/// Transient state of one in-flight drag gesture.
///
/// Created on drag start, mutated on drag over, and destroyed
/// unconditionally on drag end regardless of what the drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    task_id: TaskId,
    origin: Option<String>,
    hovered: Option<String>,
}

impl DragSession {
    /// Returns the dragged task's identity.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the container the task was picked up from, when the scheme
    /// has one for it.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Returns the container currently hovered for highlight purposes.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }
}

/// What a drop ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside any valid zone; nothing was attempted.
    NoTarget,
    /// The dragged id was empty or matched no task in the collection.
    UnknownTask,
    /// The target container id resolved to no field value.
    UnknownContainer,
    /// The task already lived in the target container; the idempotence
    /// guard suppressed the write and the view churn.
    AlreadyInPlace,
    /// The optimistic patch was applied and the write confirmed.
    Persisted,
    /// The write failed and the authoritative collection was re-fetched in
    /// its place.
    RolledBack,
    /// The write failed and so did the recovery fetch; the optimistic
    /// patch is still showing.
    Desynced,
}

/// Translates drag gestures into optimistic single-field task mutations.
pub struct DragCoordinator<S: RemoteTaskStore> {
    store: Arc<S>,
    source: ViewSource,
    scheme: ContainerScheme,
    collection: TaskCollection,
    session: Option<DragSession>,
}

impl<S: RemoteTaskStore> DragCoordinator<S> {
    /// Creates a coordinator with an empty collection. Call
    /// [`DragCoordinator::refresh`] to load it.
    #[must_use]
    pub fn new(store: Arc<S>, source: ViewSource, scheme: ContainerScheme) -> Self {
        Self {
            store,
            source,
            scheme,
            collection: TaskCollection::new(),
            session: None,
        }
    }

    /// Returns the collection backing the view.
    #[must_use]
    pub const fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    /// Returns the container scheme the view renders with.
    #[must_use]
    pub const fn scheme(&self) -> &ContainerScheme {
        &self.scheme
    }

    /// Returns the in-flight drag session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Installs a projection filter on the collection.
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.collection.set_filter(filter);
    }

    /// Discards the local collection and adopts the store's authoritative
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::sync::ports::RemoteStoreError`] when the fetch
    /// fails; the previous collection is kept in that case.
    pub async fn refresh(&mut self) -> RemoteStoreResult<()> {
        let tasks = match self.source {
            ViewSource::Board(board_id) => self.store.fetch_board(board_id).await?.tasks,
            ViewSource::OwnedTasks => self.store.fetch_tasks().await?,
        };
        self.collection.replace_all(tasks);
        Ok(())
    }

    /// Starts a drag for the given raw task id.
    ///
    /// An id that is empty or matches no task in the collection creates no
    /// session and surfaces no error; downstream container-membership
    /// computation depends on identity equality, so an entity without a
    /// stable identity must never become draggable.
    pub fn begin_drag(&mut self, raw_task_id: &str) {
        let Ok(task_id) = TaskId::parse(raw_task_id) else {
            return;
        };
        let Some(task) = self.collection.find(&task_id) else {
            return;
        };
        let origin = self.scheme.origin_of(task);
        self.session = Some(DragSession {
            task_id,
            origin,
            hovered: None,
        });
    }

    /// Records the container currently hovered, for highlight purposes
    /// only. Idempotent; may be called at any frequency during the
    /// gesture. No-op outside a drag.
    pub fn hover(&mut self, container_id: Option<&str>) {
        if let Some(session) = &mut self.session {
            session.hovered = container_id.map(str::to_owned);
        }
    }

    /// Ends a drag, applying the drop if it resolves to a move.
    ///
    /// The transient drag and hover state is cleared synchronously before
    /// any asynchronous work, so the UI never shows a stuck drag while the
    /// write is in flight or after it fails.
    pub async fn end_drag(&mut self, raw_task_id: &str, target: Option<&str>) -> DropOutcome {
        self.session = None;

        let Some(container_id) = target else {
            return DropOutcome::NoTarget;
        };
        let Ok(task_id) = TaskId::parse(raw_task_id) else {
            return DropOutcome::UnknownTask;
        };
        if self.collection.find(&task_id).is_none() {
            return DropOutcome::UnknownTask;
        }
        let Some(resolved) = self.scheme.resolve(container_id) else {
            return DropOutcome::UnknownContainer;
        };
        // Dropped back on the container it already lives in: a deliberate
        // idempotence guard, not an optimization.
        if self
            .collection
            .find(&task_id)
            .is_some_and(|task| self.scheme.contains(container_id, task))
        {
            return DropOutcome::AlreadyInPlace;
        }

        let update = self.apply_optimistic(&task_id, resolved);
        match self.store.update_task(&task_id, update).await {
            Ok(_) => DropOutcome::Persisted,
            Err(err) => {
                tracing::warn!(task = %task_id, error = %err, "drag persistence failed; resyncing");
                self.recover().await
            }
        }
    }

    /// Patches the one task in the local collection and returns the
    /// matching single-field update for the store.
    fn apply_optimistic(&mut self, task_id: &TaskId, resolved: DropTarget) -> TaskUpdate {
        match resolved {
            DropTarget::Status(status) => {
                self.collection.patch_status(task_id, status);
                TaskUpdate::status(status)
            }
            DropTarget::DueDate(date) => {
                let due = date.and_time(NaiveTime::MIN).and_utc();
                self.collection.patch_due_date(task_id, due);
                TaskUpdate::due_date(due)
            }
        }
    }

    /// Discards the optimistic copy by re-fetching the authoritative
    /// collection. No partial-patch rollback is attempted.
    async fn recover(&mut self) -> DropOutcome {
        match self.refresh().await {
            Ok(()) => DropOutcome::RolledBack,
            Err(err) => {
                tracing::error!(error = %err, "resync after failed drag also failed");
                DropOutcome::Desynced
            }
        }
    }
}
