//! Authoritative in-memory task collection.

use super::{
    TaskStoreConfig,
    worker::{PersistenceCommand, PersistenceWorker},
};
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch, TaskQuery, TaskSummary},
    persistence::TaskArchive,
    ports::KeyValueStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::warn;

/// Immutable view of the task collection at one revision.
///
/// Every effective mutation publishes a new snapshot with a higher revision.
/// Tasks keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSnapshot {
    revision: u64,
    tasks: Arc<[Task]>,
}

impl TaskSnapshot {
    /// Returns the revision counter. The initial empty collection is `0`.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn succeed(&self, tasks: Vec<Task>) -> Self {
        Self {
            revision: self.revision.saturating_add(1),
            tasks: tasks.into(),
        }
    }
}

/// Errors returned by task store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The persistence worker is no longer running.
    #[error("persistence worker has stopped")]
    WorkerStopped,
}

/// How an effective mutation is mirrored into persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteKind {
    Save,
    Clear,
}

/// Owns the task collection and is the only writer to persistence.
///
/// Mutations apply to memory synchronously and return immediately; the new
/// collection is then written in full by the [`PersistenceWorker`] returned
/// from [`TaskStore::new`]. Write failures are logged by the worker and never
/// undo the in-memory change.
pub struct TaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    archive: TaskArchive<K>,
    clock: Arc<C>,
    state: watch::Sender<TaskSnapshot>,
    commands: mpsc::UnboundedSender<PersistenceCommand>,
}

impl<K, C> TaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates an empty store and the worker that persists its snapshots.
    ///
    /// The worker must be spawned for writes to reach the key-value store:
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use jotter::task::{
    ///     adapters::memory::InMemoryKeyValueStore,
    ///     domain::TaskDraft,
    ///     persistence::TaskArchive,
    ///     services::TaskStore,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// # tokio::runtime::Runtime::new().map(|rt| rt.block_on(async {
    /// let archive = TaskArchive::with_default_key(Arc::new(InMemoryKeyValueStore::new()));
    /// let (store, worker) = TaskStore::new(archive, Arc::new(DefaultClock));
    /// tokio::spawn(worker.run());
    ///
    /// store.add_task(TaskDraft::new("Buy milk"));
    /// assert_eq!(store.snapshot().len(), 1);
    /// # })).ok();
    /// ```
    #[must_use]
    pub fn new(archive: TaskArchive<K>, clock: Arc<C>) -> (Self, PersistenceWorker<K>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        let (state, _initial) = watch::channel(TaskSnapshot::default());
        let worker = PersistenceWorker::new(archive.clone(), receiver);
        let store = Self {
            archive,
            clock,
            state,
            commands,
        };
        (store, worker)
    }

    /// Creates a store whose snapshot key comes from `config`.
    #[must_use]
    pub fn with_config(
        store: Arc<K>,
        clock: Arc<C>,
        config: &TaskStoreConfig,
    ) -> (Self, PersistenceWorker<K>) {
        Self::new(config.archive(store), clock)
    }

    /// Replaces the collection with the persisted snapshot.
    ///
    /// Call once at startup, before issuing mutations. Missing, corrupt, or
    /// unreadable data leaves the collection empty; the failure is logged and
    /// not returned. Loading notifies subscribers but does not write back.
    pub async fn load_from_persistence(&self) {
        let tasks = self.archive.load().await;
        self.state
            .send_modify(|snapshot| *snapshot = snapshot.succeed(tasks));
    }

    /// Appends a new incomplete task and returns its identifier.
    pub fn add_task(&self, draft: TaskDraft) -> TaskId {
        let created_at = self.clock.utc();
        let mut id = TaskId::generate(created_at);
        self.commit(WriteKind::Save, |tasks| {
            while tasks.iter().any(|task| task.id() == &id) {
                id = TaskId::generate(created_at);
            }
            tasks.push(Task::create(id.clone(), draft, created_at));
            true
        });
        id
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Returns `false`, leaving the collection untouched, when no task has
    /// that identifier or the patch is empty.
    pub fn update_task(&self, id: &TaskId, patch: TaskPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        self.commit(WriteKind::Save, |tasks| {
            let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
                return false;
            };
            task.apply(patch);
            true
        })
    }

    /// Removes the task with `id`. Returns `false` when it was not present.
    pub fn delete_task(&self, id: &TaskId) -> bool {
        self.commit(WriteKind::Save, |tasks| {
            let before = tasks.len();
            tasks.retain(|task| task.id() != id);
            tasks.len() != before
        })
    }

    /// Flips the completion flag of the task with `id`. Returns `false` when
    /// it was not present.
    pub fn toggle_task(&self, id: &TaskId) -> bool {
        self.commit(WriteKind::Save, |tasks| {
            let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
                return false;
            };
            task.toggle();
            true
        })
    }

    /// Removes every task and deletes the stored snapshot.
    pub fn clear_all(&self) {
        self.commit(WriteKind::Clear, |tasks| {
            tasks.clear();
            true
        });
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        self.state.borrow().clone()
    }

    /// Returns a copy of the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.state.borrow().find(id).cloned()
    }

    /// Returns the tasks matching `query`, in the query's order.
    #[must_use]
    pub fn query(&self, query: &TaskQuery) -> Vec<Task> {
        query.apply(self.state.borrow().tasks())
    }

    /// Returns completion counts for the current collection.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary::from_tasks(self.state.borrow().tasks())
    }

    /// Subscribes to snapshot changes.
    ///
    /// The receiver starts at the current snapshot and observes every later
    /// mutation or load.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.state.subscribe()
    }

    /// Waits until every write queued so far has been attempted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::WorkerStopped`] when the persistence worker
    /// is not running.
    pub async fn flush(&self) -> Result<(), TaskStoreError> {
        let (done, finished) = oneshot::channel();
        self.commands
            .send(PersistenceCommand::Flush(done))
            .map_err(|_| TaskStoreError::WorkerStopped)?;
        finished.await.map_err(|_| TaskStoreError::WorkerStopped)
    }

    /// Applies `change` to a copy of the collection and, when it reports an
    /// effective change, publishes the result and queues its write.
    ///
    /// The write is queued while the snapshot lock is held, so queued writes
    /// follow revision order.
    fn commit<F>(&self, kind: WriteKind, change: F) -> bool
    where
        F: FnOnce(&mut Vec<Task>) -> bool,
    {
        self.state.send_if_modified(|snapshot| {
            let mut tasks = snapshot.tasks().to_vec();
            if !change(&mut tasks) {
                return false;
            }
            *snapshot = snapshot.succeed(tasks);
            let command = match kind {
                WriteKind::Save => PersistenceCommand::Save(snapshot.clone()),
                WriteKind::Clear => PersistenceCommand::Clear {
                    revision: snapshot.revision(),
                },
            };
            if self.commands.send(command).is_err() {
                warn!(
                    target: "jotter::store",
                    revision = snapshot.revision(),
                    "persistence worker has stopped; change kept in memory only"
                );
            }
            true
        })
    }
}
