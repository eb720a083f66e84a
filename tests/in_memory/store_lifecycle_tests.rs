//! In-memory integration tests for task store mutations and reads.

use std::sync::Arc;

use super::helpers::{backing, start_store};
use jotter::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{TaskDraft, TaskFilter, TaskPatch, TaskQuery, TaskSort},
    persistence::{DEFAULT_STORAGE_KEY, decode_tasks},
    ports::KeyValueStore,
};
use eyre::{Result, ensure, eyre};
use rstest::rstest;

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn edited_task_is_persisted_with_merged_fields(
    backing: Arc<InMemoryKeyValueStore>,
) -> Result<()> {
    let store = start_store(&backing);
    let id = store.add_task(TaskDraft::new("Buy milk").with_description("semi-skimmed"));

    let due = chrono::Utc::now() + chrono::Duration::days(2);
    ensure!(
        store.update_task(&id, TaskPatch::new().with_due_date(due)),
        "update should report a change"
    );
    store.flush().await?;

    let blob = backing
        .get(DEFAULT_STORAGE_KEY)
        .await?
        .ok_or_else(|| eyre!("snapshot was not written"))?;
    let stored = decode_tasks(&blob)?;
    let task = stored.first().ok_or_else(|| eyre!("stored snapshot is empty"))?;
    assert_eq!(task.id(), &id);
    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.description(), Some("semi-skimmed"));
    assert_eq!(task.due_date(), store.get(&id).and_then(|task| task.due_date()));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn stored_snapshot_tracks_the_latest_collection(
    backing: Arc<InMemoryKeyValueStore>,
) -> Result<()> {
    let store = start_store(&backing);

    let ids: Vec<_> = ["Buy milk", "Call mom", "Water plants", "Pay rent"]
        .into_iter()
        .map(|title| store.add_task(TaskDraft::new(title)))
        .collect();
    for id in ids.iter().step_by(2) {
        store.toggle_task(id);
    }
    if let Some(last) = ids.last() {
        store.delete_task(last);
    }
    store.flush().await?;

    let blob = backing
        .get(DEFAULT_STORAGE_KEY)
        .await?
        .ok_or_else(|| eyre!("snapshot was not written"))?;
    assert_eq!(decode_tasks(&blob)?, store.snapshot().tasks());
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn list_view_queries_combine_search_filter_and_sort(
    backing: Arc<InMemoryKeyValueStore>,
) -> Result<()> {
    let store = start_store(&backing);
    let milk = store.add_task(TaskDraft::new("Buy milk"));
    store.add_task(TaskDraft::new("buy bread"));
    store.add_task(TaskDraft::new("Call mom").with_description("ask about the milk run"));
    store.toggle_task(&milk);

    let pending = store.query(
        &TaskQuery::new()
            .with_search("MILK")
            .with_filter(TaskFilter::Pending)
            .with_sort(TaskSort::Title),
    );
    let pending_titles: Vec<_> = pending.iter().map(|task| task.title()).collect();
    assert_eq!(pending_titles, vec!["Call mom"]);

    let by_title = store.query(&TaskQuery::new().with_sort(TaskSort::Title));
    let sorted_titles: Vec<_> = by_title.iter().map(|task| task.title()).collect();
    assert_eq!(sorted_titles, vec!["buy bread", "Buy milk", "Call mom"]);

    let summary = store.summary();
    assert_eq!((summary.total, summary.pending, summary.completed), (3, 2, 1));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_removes_everything(backing: Arc<InMemoryKeyValueStore>) -> Result<()> {
    let store = start_store(&backing);
    store.add_task(TaskDraft::new("Buy milk"));
    store.add_task(TaskDraft::new("Call mom"));

    store.clear_all();
    store.flush().await?;

    assert!(store.snapshot().is_empty());
    assert_eq!(backing.get(DEFAULT_STORAGE_KEY).await?, None);
    Ok(())
}
