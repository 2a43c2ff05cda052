use super::cache_repository::AudioCacheRepository;
use crate::domain::audio::CacheKey;
use crate::infrastructure::storage::{ObjectStore, StorageError, UploadOptions};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Object-store backed audio cache with an optional in-process memory layer
/// in front of remote downloads.
pub struct StorageCacheRepository {
    object_store: Arc<dyn ObjectStore>,
    cache_control_secs: u32,
    memory: Option<Cache<String, Arc<Vec<u8>>>>,
}

impl StorageCacheRepository {
    pub fn new(
        object_store: Arc<dyn ObjectStore>,
        cache_control_secs: u32,
        memory_cache_enabled: bool,
    ) -> Self {
        // Initialize the memory layer if enabled
        let memory = if memory_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(100)
                    .time_to_idle(Duration::from_secs(30 * 60)) // 30 minutes, refreshes on access
                    .build(),
            )
        } else {
            None
        };

        Self {
            object_store,
            cache_control_secs,
            memory,
        }
    }
}

#[async_trait]
impl AudioCacheRepository for StorageCacheRepository {
    async fn lookup(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let object_name = key.object_name();

        if let Some(memory) = &self.memory {
            if let Some(audio) = memory.get(&object_name).await {
                tracing::debug!(
                    key = %key,
                    audio_size = audio.len(),
                    "Audio cache memory hit"
                );
                return Some(audio.as_ref().clone());
            }
        }

        match self.object_store.download(key.bucket(), &object_name).await {
            Ok(audio) => {
                tracing::info!(key = %key, audio_size = audio.len(), "Audio cache hit");
                if let Some(memory) = &self.memory {
                    memory
                        .insert(object_name, Arc::new(audio.clone()))
                        .await;
                }
                Some(audio)
            }
            Err(StorageError::NotFound(_)) => {
                tracing::debug!(key = %key, "Audio cache miss");
                None
            }
            Err(e) => {
                // Lookup failures are control flow, not errors: proceed to
                // synthesize.
                tracing::debug!(key = %key, error = %e, "Audio cache lookup failed, treating as miss");
                None
            }
        }
    }

    async fn store(&self, key: &CacheKey, bytes: &[u8]) -> Result<(), String> {
        let options = UploadOptions {
            upsert: true,
            cache_control_secs: self.cache_control_secs,
            content_type: "audio/mpeg",
        };

        self.object_store
            .upload(key.bucket(), &key.object_name(), bytes, &options)
            .await
            .map_err(|e| e.to_string())?;

        if let Some(memory) = &self.memory {
            memory
                .insert(key.object_name(), Arc::new(bytes.to_vec()))
                .await;
        }

        Ok(())
    }
}
