use async_trait::async_trait;

use crate::prompt::{latest_of, Prompt};

use super::Result;

/// Keyed storage for prompt records.
///
/// Records live under a partition key (`reference`) and a sort key
/// (`versioning`). Sort keys are compared as plain strings, so callers
/// must zero-pad numeric version tokens for "latest" to mean what they
/// expect.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Gets the record stored at `(reference, versioning)`.
    async fn get_prompt(&self, reference: &str, versioning: &str) -> Result<Option<Prompt>>;

    /// Writes a record, replacing any record with the same key.
    async fn put_prompt(&self, prompt: &Prompt) -> Result<()>;

    /// Writes a record only if its key is unused.
    ///
    /// Fails with `RepositoryError::AlreadyExists` and leaves the stored
    /// record untouched when the key is taken.
    async fn put_prompt_if_absent(&self, prompt: &Prompt) -> Result<()>;

    /// Gets every record of a reference, ascending by `versioning`.
    async fn query_by_reference(&self, reference: &str) -> Result<Vec<Prompt>>;

    /// Gets the record with the greatest `versioning` for a reference.
    async fn latest_prompt(&self, reference: &str) -> Result<Option<Prompt>> {
        let prompts = self.query_by_reference(reference).await?;
        Ok(latest_of(&prompts).cloned())
    }
}
