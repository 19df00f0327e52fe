//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository trait
//! using `aws-sdk-dynamodb`. The table uses `reference` as partition key and
//! `versioning` as sort key, both strings.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
