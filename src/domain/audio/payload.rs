use super::error::SynthesisError;
use base64::{engine::general_purpose, Engine as _};

/// How much of a bad payload to carry in the error for diagnostics.
const PREVIEW_CHARS: usize = 32;

/// Base64-encoded audio as returned by the synthesis function, still
/// undecoded. Decoding is deferred to the finalizing phase of the pipeline.
#[derive(Debug, Clone)]
pub struct AudioPayload(String);

impl AudioPayload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Validate and decode the payload into raw audio bytes.
    ///
    /// The payload must be non-empty after whitespace stripping and match the
    /// base64 alphabet (`[A-Za-z0-9+/]*={0,2}`); anything else is rejected
    /// before a binary decode is attempted, with a truncated preview of the
    /// offending text for diagnostics.
    pub fn decode(&self) -> Result<Vec<u8>, SynthesisError> {
        let compact: String = self.0.chars().filter(|c| !c.is_whitespace()).collect();

        if compact.is_empty() {
            return Err(SynthesisError::EmptyPayload);
        }

        let base64_pattern = regex::Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap();
        if !base64_pattern.is_match(&compact) {
            return Err(SynthesisError::Decode {
                preview: preview(&compact),
            });
        }

        general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|_| SynthesisError::Decode {
                preview: preview(&compact),
            })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn preview(payload: &str) -> String {
    payload.chars().take(PREVIEW_CHARS).collect()
}
