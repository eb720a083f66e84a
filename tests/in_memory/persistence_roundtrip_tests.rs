//! Reloading a store from a snapshot written by an earlier session.

use std::sync::Arc;

use super::helpers::{backing, start_store, start_store_with};
use jotter::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{TaskDraft, TaskPatch},
    persistence::DEFAULT_STORAGE_KEY,
    ports::KeyValueStore,
    services::TaskStoreConfig,
};
use eyre::{Result, eyre};
use rstest::rstest;

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn restarted_store_sees_the_previous_session(
    backing: Arc<InMemoryKeyValueStore>,
) -> Result<()> {
    let first_session = start_store(&backing);
    let milk = first_session.add_task(TaskDraft::new("Buy milk").with_description("2 litres"));
    let mom = first_session.add_task(TaskDraft::new("Call mom"));
    first_session.update_task(
        &milk,
        TaskPatch::new().with_due_date(chrono::Utc::now()),
    );
    first_session.toggle_task(&mom);
    first_session.flush().await?;
    let expected = first_session.snapshot();
    drop(first_session);

    let second_session = start_store(&backing);
    second_session.load_from_persistence().await;

    assert_eq!(second_session.snapshot().tasks(), expected.tasks());
    let restored = second_session
        .get(&milk)
        .ok_or_else(|| eyre!("restored task missing"))?;
    assert_eq!(restored.description(), Some("2 litres"));
    assert_eq!(
        Some(restored.created_at()),
        expected.find(&milk).map(|task| task.created_at())
    );
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn separate_keys_hold_separate_collections(
    backing: Arc<InMemoryKeyValueStore>,
) -> Result<()> {
    let work = TaskStoreConfig::default().with_storage_key("work_tasks");
    let personal = start_store(&backing);
    let office = start_store_with(&backing, &work);

    personal.add_task(TaskDraft::new("Buy milk"));
    office.add_task(TaskDraft::new("File report"));
    personal.flush().await?;
    office.flush().await?;

    let reloaded = start_store_with(&backing, &work);
    reloaded.load_from_persistence().await;
    let titles: Vec<_> = reloaded
        .snapshot()
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(titles, vec!["File report"]);
    assert!(backing.get(DEFAULT_STORAGE_KEY).await?.is_some());
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_is_kept_until_the_next_mutation() -> Result<()> {
    let backing = Arc::new(InMemoryKeyValueStore::with_entry(
        DEFAULT_STORAGE_KEY,
        "[{\"title\": ",
    ));
    let store = start_store(&backing);

    store.load_from_persistence().await;
    store.flush().await?;
    assert!(store.snapshot().is_empty());
    assert_eq!(
        backing.get(DEFAULT_STORAGE_KEY).await?.as_deref(),
        Some("[{\"title\": ")
    );

    store.add_task(TaskDraft::new("Buy milk"));
    store.flush().await?;

    let reloaded = start_store(&backing);
    reloaded.load_from_persistence().await;
    assert_eq!(reloaded.snapshot().len(), 1);
    Ok(())
}
