//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `prompt_api_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time (see `state.rs`).
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p prompt_api --no-default-features --features sqlite
//! ```
//!
//! Build the Lambda entry point with DynamoDB:
//! ```bash
//! cargo build -p prompt_api --no-default-features --features dynamodb,lambda
//! ```

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
