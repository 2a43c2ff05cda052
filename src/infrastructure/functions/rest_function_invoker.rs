use super::{FunctionInvoker, InvokeError};
use async_trait::async_trait;

/// Invokes edge functions over the managed backend's REST API
/// (`/functions/v1/{name}`).
pub struct RestFunctionInvoker {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestFunctionInvoker {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn function_url(&self, name: &str) -> String {
        format!(
            "{}/functions/v1/{}",
            self.base_url.trim_end_matches('/'),
            name
        )
    }
}

#[async_trait]
impl FunctionInvoker for RestFunctionInvoker {
    async fn invoke(
        &self,
        name: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError> {
        let url = self.function_url(name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| InvokeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InvokeError::Service {
                name: name.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| InvokeError::Payload(e.to_string()))
    }
}
