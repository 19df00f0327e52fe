//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use prompt_api_core::prompt::Prompt;
use prompt_api_core::storage::{PromptRepository, RepositoryError, Result};

/// Versions of one reference, ordered by `versioning`.
type Versions = BTreeMap<String, Prompt>;

/// In-memory storage backend.
///
/// The outer map is keyed by `reference`, the inner `BTreeMap` by
/// `versioning`, so range reads come back in sort-key order without an
/// explicit sort.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    prompts: Arc<RwLock<HashMap<String, Versions>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptRepository for InMemoryRepository {
    async fn get_prompt(&self, reference: &str, versioning: &str) -> Result<Option<Prompt>> {
        let prompts = self.prompts.read().await;
        Ok(prompts
            .get(reference)
            .and_then(|versions| versions.get(versioning))
            .cloned())
    }

    async fn put_prompt(&self, prompt: &Prompt) -> Result<()> {
        let mut prompts = self.prompts.write().await;
        prompts
            .entry(prompt.reference.clone())
            .or_default()
            .insert(prompt.versioning.clone(), prompt.clone());
        Ok(())
    }

    async fn put_prompt_if_absent(&self, prompt: &Prompt) -> Result<()> {
        let mut prompts = self.prompts.write().await;
        let versions = prompts.entry(prompt.reference.clone()).or_default();
        if versions.contains_key(&prompt.versioning) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Prompt",
                id: format!("{}/{}", prompt.reference, prompt.versioning),
            });
        }
        versions.insert(prompt.versioning.clone(), prompt.clone());
        Ok(())
    }

    async fn query_by_reference(&self, reference: &str) -> Result<Vec<Prompt>> {
        let prompts = self.prompts.read().await;
        Ok(prompts
            .get(reference)
            .map(|versions| versions.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn latest_prompt(&self, reference: &str) -> Result<Option<Prompt>> {
        let prompts = self.prompts.read().await;
        Ok(prompts
            .get(reference)
            .and_then(|versions| versions.last_key_value())
            .map(|(_, prompt)| prompt.clone()))
    }
}
