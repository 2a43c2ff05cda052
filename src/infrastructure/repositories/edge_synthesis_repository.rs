use super::synthesis_repository::SynthesisRepository;
use crate::domain::audio::{AudioPayload, SynthesisError};
use crate::infrastructure::functions::FunctionInvoker;
use async_trait::async_trait;
use std::sync::Arc;

/// Speech synthesis through the platform's edge function. The function wraps
/// the actual TTS provider; this client only speaks the
/// `{text, voice_id} -> {audioContent}` contract.
pub struct EdgeSynthesisRepository {
    invoker: Arc<dyn FunctionInvoker>,
    function_name: String,
}

impl EdgeSynthesisRepository {
    pub fn new(invoker: Arc<dyn FunctionInvoker>, function_name: impl Into<String>) -> Self {
        Self {
            invoker,
            function_name: function_name.into(),
        }
    }
}

#[async_trait]
impl SynthesisRepository for EdgeSynthesisRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
    ) -> Result<AudioPayload, SynthesisError> {
        let text_preview: String = text.chars().take(200).collect();
        tracing::info!(
            function = %self.function_name,
            voice_id = voice_id,
            text_length = text.len(),
            text_preview = %text_preview,
            "Invoking speech synthesis function"
        );

        let body = serde_json::json!({
            "text": text,
            "voice_id": voice_id,
        });

        let response = self
            .invoker
            .invoke(&self.function_name, body)
            .await
            .map_err(|e| {
                tracing::error!(
                    function = %self.function_name,
                    error = %e,
                    "Speech synthesis invocation failed"
                );
                // Transport failures carry their source; in-band provider
                // errors below stay Invocation
                SynthesisError::Other(e.into())
            })?;

        // The function reports provider failures in-band
        if let Some(message) = response.get("error").and_then(|v| v.as_str()) {
            return Err(SynthesisError::Invocation(message.to_string()));
        }

        let audio_content = response
            .get("audioContent")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                SynthesisError::Invocation("synthesis response missing audioContent".to_string())
            })?;

        tracing::debug!(
            function = %self.function_name,
            payload_size = audio_content.len(),
            "Synthesis payload received"
        );

        Ok(AudioPayload::new(audio_content))
    }
}
