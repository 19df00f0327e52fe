//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage sits behind a repository trait object and the
//! concrete backend is chosen via feature flags.

use std::{sync::Arc, time::Duration};

use prompt_api_core::storage::PromptRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "dynamodb"))]
compile_error!("Cannot enable both 'sqlite' and 'dynamodb' storage features");

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory', 'sqlite', or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. Holds the repository and the deadline
/// applied to every storage call.
#[derive(Clone)]
pub struct AppState {
    /// Prompt repository for the active backend.
    pub repository: Arc<dyn PromptRepository>,
    /// Upper bound on a single storage call.
    pub storage_timeout: Duration,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn with_repository(
        repository: Arc<dyn PromptRepository>,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            storage_timeout,
        }
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local runs and tests without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(table = %config.table_name, "Using in-memory storage");
            Ok(Self::with_repository(
                Arc::new(InMemoryRepository::new()),
                config.storage_timeout(),
            ))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(
                path = %config.sqlite_path,
                table = %config.table_name,
                "Using SQLite storage"
            );
            let repository = SqliteRepository::open(&config.sqlite_path, &config.table_name).await?;
            Ok(Self::with_repository(
                Arc::new(repository),
                config.storage_timeout(),
            ))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(
                table = %config.table_name,
                endpoint = config.dynamodb_endpoint_url.as_deref().unwrap_or("default"),
                "Using DynamoDB storage"
            );
            let repository = DynamoDbRepository::from_config(
                &config.table_name,
                config.dynamodb_endpoint_url.as_deref(),
            )
            .await;
            Ok(Self::with_repository(
                Arc::new(repository),
                config.storage_timeout(),
            ))
        }
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use crate::config::TABLE_NAME_VAR;

    #[tokio::test]
    async fn test_new_uses_configured_timeout() {
        let config = Config::from_lookup(|key| match key {
            TABLE_NAME_VAR => Some("Prompts".to_string()),
            "PROMPT_STORAGE_TIMEOUT_MS" => Some("1500".to_string()),
            _ => None,
        })
        .unwrap();

        let state = AppState::new(&config).await.unwrap();

        assert_eq!(state.storage_timeout, Duration::from_millis(1500));
        assert!(state
            .repository
            .query_by_reference("anything")
            .await
            .unwrap()
            .is_empty());
    }
}
