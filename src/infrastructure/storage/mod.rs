pub mod rest_object_store;

pub use rest_object_store::RestObjectStore;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Request(String),

    #[error("object not found: {0}")]
    NotFound(String),

    #[error("storage service returned {status}: {message}")]
    Service { status: u16, message: String },
}

/// Options for object uploads.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Overwrite an existing object under the same key.
    pub upsert: bool,
    /// Cache-control max-age for the stored object, in seconds.
    pub cache_control_secs: u32,
    pub content_type: &'static str,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            upsert: true,
            cache_control_secs: 3600,
            content_type: "audio/mpeg",
        }
    }
}

/// Binary object storage as exposed by the managed backend. Injected so the
/// caching layer is testable against an in-memory fake.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError>;

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        options: &UploadOptions,
    ) -> Result<(), StorageError>;
}
