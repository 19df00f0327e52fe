//! HTTP client for the prompt API.

pub mod health;
pub mod prompts;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Default server URL when `PROMPT_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the prompt API.
#[derive(Debug, Clone)]
pub struct PromptClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the server for every non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl PromptClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or turn the status into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        match status.as_u16() {
            404 => Err(ClientError::NotFound {
                resource: resource.to_string(),
            }),
            409 => Err(ClientError::Conflict {
                resource: resource.to_string(),
            }),
            code => {
                let text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ClientError::ServerError {
                    status: code,
                    message: error_message(&text),
                })
            }
        }
    }
}

/// Extracts the `error` field from a JSON error body, falling back to the raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .map(|body| body.error)
        .unwrap_or_else(|_| text.to_string())
}
