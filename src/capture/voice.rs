//! Turns dictation results into tasks.

use super::{DictationError, DictationEvent, segment};
use crate::task::{
    domain::{TaskDraft, TaskId},
    ports::KeyValueStore,
    services::TaskStore,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of handling one dictation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// One task was created per extracted title, in transcript order.
    Added(Vec<TaskId>),
    /// The transcript had content but no task could be extracted.
    NothingUnderstood,
    /// The transcript was blank; nothing was attempted.
    Ignored,
    /// The dictation service reported an error; no task was created.
    Failed(DictationError),
}

/// Feeds segmented transcripts into a [`TaskStore`].
pub struct VoiceCapture<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<K, C>>,
}

impl<K, C> VoiceCapture<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a capture flow writing into `store`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<K, C>>) -> Self {
        Self { store }
    }

    /// Handles a final dictation event.
    pub fn handle(&self, event: DictationEvent) -> CaptureOutcome {
        match event {
            DictationEvent::Transcript(transcript) => self.capture_transcript(&transcript),
            DictationEvent::Failed(err) => {
                if err.is_user_actionable() {
                    warn!(target: "jotter::capture", kind = %err.kind(), %err, "dictation failed");
                } else {
                    debug!(target: "jotter::capture", kind = %err.kind(), "dictation ended without speech");
                }
                CaptureOutcome::Failed(err)
            }
        }
    }

    /// Segments `transcript` and adds one task per extracted title.
    pub fn capture_transcript(&self, transcript: &str) -> CaptureOutcome {
        if transcript.trim().is_empty() {
            return CaptureOutcome::Ignored;
        }

        let titles = segment(transcript);
        debug!(
            target: "jotter::capture",
            title_count = titles.len(),
            "segmented transcript"
        );
        if titles.is_empty() {
            return CaptureOutcome::NothingUnderstood;
        }

        let ids = titles
            .into_iter()
            .map(|title| self.store.add_task(TaskDraft::new(title)))
            .collect();
        CaptureOutcome::Added(ids)
    }
}
