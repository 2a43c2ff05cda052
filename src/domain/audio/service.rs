use super::cache_key::CacheKey;
use super::error::SynthesisError;
use super::payload::AudioPayload;
use crate::infrastructure::repositories::{AudioCacheRepository, SynthesisRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Orchestrates audio acquisition: cache-only lookups, chunked synthesis and
/// best-effort cache writes. Owns no playback state; one instance is shared
/// by every player session in the process.
pub struct AudioService {
    cache_repo: Arc<dyn AudioCacheRepository>,
    synthesis_repo: Arc<dyn SynthesisRepository>,
}

#[async_trait]
pub trait AudioServiceApi: Send + Sync {
    /// Cache-only lookup. Never triggers synthesis; any storage failure is a
    /// miss.
    async fn lookup_cached(&self, key: &CacheKey) -> Option<Vec<u8>>;

    /// Synthesize every chunk in order. Returns the still-encoded payloads;
    /// decoding happens in the finalizing phase.
    async fn synthesize_chunks(
        &self,
        chunks: &[String],
        voice_id: &str,
    ) -> Result<Vec<AudioPayload>, SynthesisError>;
}

#[async_trait]
impl AudioServiceApi for AudioService {
    async fn lookup_cached(&self, key: &CacheKey) -> Option<Vec<u8>> {
        self.cache_repo.lookup(key).await
    }

    async fn synthesize_chunks(
        &self,
        chunks: &[String],
        voice_id: &str,
    ) -> Result<Vec<AudioPayload>, SynthesisError> {
        let start_time = std::time::Instant::now();
        let mut payloads = Vec::with_capacity(chunks.len());

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::info!(
                chunk_index = index,
                chunk_size = chunk.len(),
                "Synthesizing chunk"
            );

            let payload = self.synthesis_repo.synthesize(chunk, voice_id).await?;

            tracing::info!(
                chunk_index = index,
                payload_size = payload.len(),
                "Chunk synthesized"
            );
            payloads.push(payload);
        }

        let duration = start_time.elapsed();
        let characters_count: usize = chunks.iter().map(|c| c.len()).sum();
        tracing::info!(
            latency_ms = duration.as_millis(),
            characters_count = characters_count,
            chunk_count = chunks.len(),
            "Synthesis completed"
        );

        Ok(payloads)
    }
}

impl AudioService {
    pub fn new(
        cache_repo: Arc<dyn AudioCacheRepository>,
        synthesis_repo: Arc<dyn SynthesisRepository>,
    ) -> Self {
        Self {
            cache_repo,
            synthesis_repo,
        }
    }

    /// Decode every payload and concatenate the audio streams in chunk order.
    pub fn decode_and_merge(payloads: Vec<AudioPayload>) -> Result<Vec<u8>, SynthesisError> {
        let mut merged_audio = Vec::new();

        for (index, payload) in payloads.iter().enumerate() {
            let audio_data = payload.decode()?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                chunk_index = index,
                total_audio_size = merged_audio.len(),
                "Chunk decoded and merged"
            );
        }

        Ok(merged_audio)
    }

    /// Persist freshly synthesized audio without blocking the caller. The
    /// audio is already playable; a write failure is logged and swallowed.
    pub fn store_in_background(&self, key: CacheKey, audio: Arc<Vec<u8>>) {
        let cache_repo = Arc::clone(&self.cache_repo);
        tokio::spawn(async move {
            match cache_repo.store(&key, &audio).await {
                Ok(()) => {
                    tracing::info!(key = %key, audio_size = audio.len(), "Audio cached");
                }
                Err(e) => {
                    tracing::warn!(
                        key = %key,
                        error = %e,
                        "Failed to cache audio, playback unaffected"
                    );
                }
            }
        });
    }
}
