/// Failures produced while generating audio. All of these surface to the
/// player as a terminal error state with a manual retry affordance; nothing
/// here is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis invocation failed: {0}")]
    Invocation(String),

    #[error("synthesis returned an empty audio payload")]
    EmptyPayload,

    #[error("synthesis returned a malformed audio payload: {preview}")]
    Decode { preview: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
