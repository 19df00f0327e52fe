//! Prompt API operations.

use prompt_api_core::prompt::{Prompt, WritePromptRequest, RESERVED_VERSIONING};
use prompt_api_core::routing::ROUTE_PREFIX;
use reqwest::header::IF_NONE_MATCH;

use super::PromptClient;
use crate::error::{ClientError, Result};

/// Builds `/prompt/{reference}[/{segment}]` with each segment percent-encoded.
pub fn prompt_path(reference: &str, segment: Option<&str>) -> String {
    let mut path = format!("{ROUTE_PREFIX}/{}", urlencoding::encode(reference));
    if let Some(segment) = segment {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

impl PromptClient {
    /// Get the version with the greatest versioning token.
    pub async fn get_latest(&self, reference: &str) -> Result<Prompt> {
        let response = self
            .client
            .get(self.url(&prompt_path(reference, None)))
            .send()
            .await?;
        self.handle_response(response, reference).await
    }

    /// Get one exact version.
    pub async fn get_version(&self, reference: &str, versioning: &str) -> Result<Prompt> {
        if versioning == RESERVED_VERSIONING {
            return Err(ClientError::InvalidInput(format!(
                "'{RESERVED_VERSIONING}' cannot be fetched as a version; use list_versions"
            )));
        }
        let response = self
            .client
            .get(self.url(&prompt_path(reference, Some(versioning))))
            .send()
            .await?;
        self.handle_response(response, &format!("{reference}/{versioning}"))
            .await
    }

    /// List every version of a reference, ascending by versioning.
    pub async fn list_versions(&self, reference: &str) -> Result<Vec<Prompt>> {
        let response = self
            .client
            .get(self.url(&prompt_path(reference, Some(RESERVED_VERSIONING))))
            .send()
            .await?;
        self.handle_response(response, reference).await
    }

    /// Store a version.
    ///
    /// With `create_only`, the server refuses to replace an existing version
    /// and the call fails with `ClientError::Conflict`.
    pub async fn put_prompt(
        &self,
        reference: &str,
        versioning: &str,
        content: &str,
        create_only: bool,
    ) -> Result<Prompt> {
        let body = WritePromptRequest {
            content: content.to_string(),
        };
        let mut request = self
            .client
            .put(self.url(&prompt_path(reference, Some(versioning))))
            .json(&body);
        if create_only {
            request = request.header(IF_NONE_MATCH, "*");
        }

        let response = request.send().await?;
        self.handle_response(response, &format!("{reference}/{versioning}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use prompt_api::{app::create_app, state::AppState, storage::InMemoryRepository};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves the API on an ephemeral port and returns a client for it.
    async fn spawn_server() -> PromptClient {
        let state = AppState::with_repository(
            Arc::new(InMemoryRepository::new()),
            Duration::from_secs(2),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_app(state)).await.unwrap();
        });
        PromptClient::new(format!("http://{addr}"))
    }

    #[test]
    fn test_prompt_path_encodes_segments() {
        assert_eq!(prompt_path("greeting", None), "/prompt/greeting");
        assert_eq!(
            prompt_path("team/greeting", Some("v 1")),
            "/prompt/team%2Fgreeting/v%201"
        );
    }

    #[tokio::test]
    async fn test_put_get_and_list() {
        let client = spawn_server().await;

        client
            .put_prompt("team/greeting", "0001", "Hello", false)
            .await
            .unwrap();
        client
            .put_prompt("team/greeting", "0002", "Hi", false)
            .await
            .unwrap();

        let latest = client.get_latest("team/greeting").await.unwrap();
        assert_eq!(latest.versioning, "0002");

        let exact = client.get_version("team/greeting", "0001").await.unwrap();
        assert_eq!(exact.content, "Hello");

        let all = client.list_versions("team/greeting").await.unwrap();
        assert_eq!(all.len(), 2);

        client.livez().await.unwrap();
    }

    #[tokio::test]
    async fn test_status_errors() {
        let client = spawn_server().await;

        assert!(matches!(
            client.get_latest("missing").await,
            Err(ClientError::NotFound { .. })
        ));

        client.put_prompt("greeting", "0001", "A", true).await.unwrap();
        assert!(matches!(
            client.put_prompt("greeting", "0001", "B", true).await,
            Err(ClientError::Conflict { .. })
        ));

        assert!(matches!(
            client.get_version("greeting", "versions").await,
            Err(ClientError::InvalidInput(_))
        ));
    }
}
