//! Background writer that mirrors store snapshots into persistence.

use super::TaskSnapshot;
use crate::task::{persistence::TaskArchive, ports::KeyValueStore};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

/// Work queued by the task store for the persistence worker.
#[derive(Debug)]
pub(crate) enum PersistenceCommand {
    /// Replace the stored blob with this snapshot.
    Save(TaskSnapshot),
    /// Remove the stored blob.
    Clear {
        /// Revision of the emptied collection.
        revision: u64,
    },
    /// Signal once every earlier command has been processed.
    Flush(oneshot::Sender<()>),
}

/// Applies queued snapshot writes one at a time, in mutation order.
///
/// Spawn [`PersistenceWorker::run`] on the async runtime after creating the
/// store. Failed writes are logged and skipped; the next mutation writes the
/// full collection again.
#[derive(Debug)]
pub struct PersistenceWorker<K>
where
    K: KeyValueStore,
{
    archive: TaskArchive<K>,
    commands: mpsc::UnboundedReceiver<PersistenceCommand>,
}

impl<K> PersistenceWorker<K>
where
    K: KeyValueStore,
{
    pub(crate) const fn new(
        archive: TaskArchive<K>,
        commands: mpsc::UnboundedReceiver<PersistenceCommand>,
    ) -> Self {
        Self { archive, commands }
    }

    /// Processes queued writes until every store handle has been dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            self.handle(command).await;
        }
        debug!(target: "jotter::store", "persistence worker stopped");
    }

    async fn handle(&self, command: PersistenceCommand) {
        match command {
            PersistenceCommand::Save(snapshot) => {
                if let Err(err) = self.archive.save(snapshot.tasks()).await {
                    error!(
                        target: "jotter::store",
                        key = %self.archive.key(),
                        revision = snapshot.revision(),
                        %err,
                        "failed to persist task snapshot"
                    );
                }
            }
            PersistenceCommand::Clear { revision } => {
                if let Err(err) = self.archive.clear().await {
                    error!(
                        target: "jotter::store",
                        key = %self.archive.key(),
                        revision,
                        %err,
                        "failed to clear task snapshot"
                    );
                }
            }
            PersistenceCommand::Flush(done) => {
                // The flushing caller may have given up waiting.
                let _ignored = done.send(());
            }
        }
    }
}
