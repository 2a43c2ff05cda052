use super::{ObjectStore, StorageError, UploadOptions};
use async_trait::async_trait;

/// Object store backed by the managed backend's storage REST API
/// (`/storage/v1/object/{bucket}/{path}`).
pub struct RestObjectStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestObjectStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url.trim_end_matches('/'),
            bucket,
            path
        )
    }
}

#[async_trait]
impl ObjectStore for RestObjectStore {
    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        let url = self.object_url(bucket, path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(format!("{bucket}/{path}")));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Service { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        tracing::debug!(
            bucket = bucket,
            path = path,
            size = bytes.len(),
            "Object downloaded"
        );

        Ok(bytes.to_vec())
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        options: &UploadOptions,
    ) -> Result<(), StorageError> {
        let url = self.object_url(bucket, path);

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, options.content_type)
            .header(
                reqwest::header::CACHE_CONTROL,
                cache_control_value(options.cache_control_secs),
            );

        if options.upsert {
            request = request.header("x-upsert", "true");
        }

        let response = request
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Service { status, message });
        }

        tracing::debug!(
            bucket = bucket,
            path = path,
            size = bytes.len(),
            "Object uploaded"
        );

        Ok(())
    }
}

/// The storage API expects a Cache-Control directive, not a bare number.
fn cache_control_value(secs: u32) -> String {
    format!("max-age={secs}")
}
