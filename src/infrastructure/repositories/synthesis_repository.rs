use crate::domain::audio::{AudioPayload, SynthesisError};
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying provider behind the platform's edge functions.
///
/// Implementations are responsible for:
/// - Invoking the remote synthesis function for a single text chunk
/// - Extracting the base64 audio payload from the response
/// - Surfacing every failure; nothing here is retried automatically
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Synthesize one text chunk with the given voice.
    ///
    /// Returns the still-encoded payload; decoding and validation happen in
    /// the finalizing phase of the pipeline.
    ///
    /// # Errors
    /// Returns error on network failure, remote function error or an absent
    /// payload.
    async fn synthesize(&self, text: &str, voice_id: &str)
        -> Result<AudioPayload, SynthesisError>;
}
