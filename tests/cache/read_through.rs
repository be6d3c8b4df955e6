use mnb_rs::cache::read_through;
use mnb_rs::{CacheMode, CacheStore, MemoryStore, MnbError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const TTL: Duration = Duration::from_secs(60);

#[tokio::test]
async fn miss_runs_producer_and_hit_skips_it() {
    let store = MemoryStore::new();
    let counter = AtomicUsize::new(0);
    let runs = &counter;
    let produce = move || async move {
        runs.fetch_add(1, Ordering::SeqCst);
        Ok::<_, MnbError>(vec!["EUR".to_string()])
    };

    let first = read_through(&store, "k", TTL, CacheMode::Use, produce).await.unwrap();
    let second = read_through(&store, "k", TTL, CacheMode::Use, produce).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn producer_errors_are_returned_and_not_stored() {
    let store = MemoryStore::new();

    let err = read_through::<Vec<String>, _, _>(&store, "k", TTL, CacheMode::Use, || async {
        Err(MnbError::format("broken", "<x"))
    })
    .await
    .unwrap_err();

    assert_eq!(err.xml(), Some("<x"));
    assert!(store.get("k").await.is_none());
}

#[tokio::test]
async fn undecodable_entry_counts_as_a_miss() {
    let store = MemoryStore::new();
    store.put("k", "not json".into(), TTL).await;

    let value = read_through(&store, "k", TTL, CacheMode::Use, || async {
        Ok::<_, MnbError>(42u32)
    })
    .await
    .unwrap();

    assert_eq!(value, 42);
    assert_eq!(store.get("k").await.as_deref(), Some("42"));
}
