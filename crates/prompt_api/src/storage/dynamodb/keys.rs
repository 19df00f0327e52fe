//! DynamoDB attribute names and key construction.
//!
//! Pure functions, no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

/// Partition key attribute.
pub const REFERENCE: &str = "reference";
/// Sort key attribute.
pub const VERSIONING: &str = "versioning";
pub const CONTENT: &str = "content";
pub const CREATED_AT: &str = "createdAt";

/// Builds the primary key of a prompt item.
pub fn prompt_key(reference: &str, versioning: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (REFERENCE.to_string(), AttributeValue::S(reference.to_string())),
        (VERSIONING.to_string(), AttributeValue::S(versioning.to_string())),
    ])
}

/// Identifier used in error messages and logs.
pub fn prompt_id(reference: &str, versioning: &str) -> String {
    format!("{reference}/{versioning}")
}
