//! In-memory storage backend.
//!
//! Keeps every prompt in a `HashMap` of `BTreeMap`s wrapped in
//! `Arc<RwLock<_>>`. Nothing is persisted, which makes it the backend of
//! choice for tests and local runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use prompt_api::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
