pub mod rest_function_invoker;

pub use rest_function_invoker::RestFunctionInvoker;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("function request failed: {0}")]
    Request(String),

    #[error("function `{name}` returned {status}: {message}")]
    Service {
        name: String,
        status: u16,
        message: String,
    },

    #[error("function response was not valid JSON: {0}")]
    Payload(String),
}

/// Remote function invocation as exposed by the managed backend. Injected so
/// the synthesis client is testable without a network.
#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    async fn invoke(
        &self,
        name: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, InvokeError>;
}
