use crate::helpers::MemoryObjectStore;
use pretty_assertions::assert_eq;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tma_voices::domain::audio::CacheKey;
use tma_voices::domain::content::LanguageCode;
use tma_voices::infrastructure::repositories::{AudioCacheRepository, StorageCacheRepository};
use tma_voices::infrastructure::storage::ObjectStore;

fn repo(store: &Arc<MemoryObjectStore>, memory_cache: bool) -> StorageCacheRepository {
    StorageCacheRepository::new(
        Arc::clone(store) as Arc<dyn ObjectStore>,
        3600,
        memory_cache,
    )
}

fn key() -> CacheKey {
    CacheKey::new("my-article", LanguageCode::English, "abc123")
}

#[tokio::test]
async fn it_should_miss_on_absent_object() {
    let store = Arc::new(MemoryObjectStore::new());
    let repo = repo(&store, false);

    assert_eq!(repo.lookup(&key()).await, None);
}

#[tokio::test]
async fn it_should_treat_storage_errors_as_misses() {
    let store = Arc::new(MemoryObjectStore::new());
    store.seed("voices-audio", "my-article.en.abc123.mp3", b"mp3");
    store.fail_downloads.store(true, Ordering::SeqCst);

    let repo = repo(&store, false);
    assert_eq!(repo.lookup(&key()).await, None);
}

#[tokio::test]
async fn it_should_store_and_read_back_under_the_exact_key() {
    let store = Arc::new(MemoryObjectStore::new());
    let repo = repo(&store, false);

    repo.store(&key(), b"mp3-bytes").await.unwrap();

    assert_eq!(
        store.object("voices-audio", "my-article.en.abc123.mp3"),
        Some(b"mp3-bytes".to_vec())
    );
    assert_eq!(repo.lookup(&key()).await, Some(b"mp3-bytes".to_vec()));
}

#[tokio::test]
async fn it_should_be_idempotent_on_repeated_stores() {
    let store = Arc::new(MemoryObjectStore::new());
    let repo = repo(&store, false);

    repo.store(&key(), b"mp3-bytes").await.unwrap();
    let first = repo.lookup(&key()).await;
    repo.store(&key(), b"mp3-bytes").await.unwrap();
    let second = repo.lookup(&key()).await;

    assert_eq!(first, second);
    assert_eq!(second, Some(b"mp3-bytes".to_vec()));
}

#[tokio::test]
async fn it_should_report_store_failures_to_the_caller() {
    let store = Arc::new(MemoryObjectStore::new());
    store.fail_uploads.store(true, Ordering::SeqCst);

    let repo = repo(&store, false);
    let result = repo.store(&key(), b"mp3-bytes").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn it_should_serve_repeat_lookups_from_memory_when_enabled() {
    let store = Arc::new(MemoryObjectStore::new());
    store.seed("voices-audio", "my-article.en.abc123.mp3", b"mp3-bytes");

    let repo = repo(&store, true);

    assert_eq!(repo.lookup(&key()).await, Some(b"mp3-bytes".to_vec()));
    assert_eq!(store.download_count(), 1);

    // Second lookup comes from the memory layer
    assert_eq!(repo.lookup(&key()).await, Some(b"mp3-bytes".to_vec()));
    assert_eq!(store.download_count(), 1);
}

#[tokio::test]
async fn it_should_populate_memory_on_store() {
    let store = Arc::new(MemoryObjectStore::new());
    let repo = repo(&store, true);

    repo.store(&key(), b"mp3-bytes").await.unwrap();

    assert_eq!(repo.lookup(&key()).await, Some(b"mp3-bytes".to_vec()));
    assert_eq!(store.download_count(), 0, "store must have primed memory");
}

#[tokio::test]
async fn it_should_hit_remote_every_time_without_memory_layer() {
    let store = Arc::new(MemoryObjectStore::new());
    store.seed("voices-audio", "my-article.en.abc123.mp3", b"mp3-bytes");

    let repo = repo(&store, false);
    repo.lookup(&key()).await;
    repo.lookup(&key()).await;

    assert_eq!(store.download_count(), 2);
}
