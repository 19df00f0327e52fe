//! Health check operations.

use super::PromptClient;
use crate::error::{ClientError, Result};

impl PromptClient {
    /// Check the liveness probe. Succeeds when the server answers 200.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "liveness probe failed".to_string(),
            })
        }
    }
}
