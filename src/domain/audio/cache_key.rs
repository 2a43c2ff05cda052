use crate::domain::content::{content_hash, LanguageCode};

/// Bucket holding all cached speech audio in the object store.
pub const AUDIO_BUCKET: &str = "voices-audio";

/// Content-addressed identifier for a cached audio object.
///
/// Renders as `voices-audio/{slug}.{lang}.{hash}.mp3`. This format is shared
/// with every other writer and reader of the bucket, so it must stay
/// byte-identical across releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub slug: String,
    pub language: LanguageCode,
    pub hash: String,
}

impl CacheKey {
    pub fn new(slug: impl Into<String>, language: LanguageCode, hash: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            language,
            hash: hash.into(),
        }
    }

    /// Derive the key for a piece of normalized speakable text.
    pub fn for_content(slug: &str, language: LanguageCode, speakable: &str) -> Self {
        Self::new(slug, language, content_hash(speakable))
    }

    /// Object name inside [`AUDIO_BUCKET`].
    pub fn object_name(&self) -> String {
        format!("{}.{}.{}.mp3", self.slug, self.language, self.hash)
    }

    pub fn bucket(&self) -> &'static str {
        AUDIO_BUCKET
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", AUDIO_BUCKET, self.object_name())
    }
}
