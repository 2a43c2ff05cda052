pub mod chunker;
pub mod hasher;
pub mod language;
pub mod normalizer;

pub use chunker::{chunk_text, MAX_CHUNK_CHARS};
pub use hasher::content_hash;
pub use language::LanguageCode;
pub use normalizer::normalize;
