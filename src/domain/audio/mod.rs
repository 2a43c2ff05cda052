pub mod cache_key;
pub mod error;
pub mod payload;
pub mod service;

pub use cache_key::{CacheKey, AUDIO_BUCKET};
pub use error::SynthesisError;
pub use payload::AudioPayload;
pub use service::{AudioService, AudioServiceApi};
