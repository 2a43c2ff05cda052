use crate::domain::audio::CacheKey;
use async_trait::async_trait;

/// Repository for the shared audio cache.
///
/// Implementations are responsible for:
/// - Mapping cache keys to object-store paths
/// - Treating every lookup failure as a miss, never an error
/// - Upsert semantics on store: re-writing identical bytes under the same
///   key is a no-op in effect
#[async_trait]
pub trait AudioCacheRepository: Send + Sync {
    /// Fetch cached audio bytes, if present. Side-effect-free; any storage
    /// error or absent object is a miss.
    async fn lookup(&self, key: &CacheKey) -> Option<Vec<u8>>;

    /// Persist audio bytes under the key with upsert semantics.
    ///
    /// # Errors
    /// Returns error if the write fails. Callers must treat this as
    /// non-fatal: audio already in hand is played regardless.
    async fn store(&self, key: &CacheKey, bytes: &[u8]) -> Result<(), String>;
}
