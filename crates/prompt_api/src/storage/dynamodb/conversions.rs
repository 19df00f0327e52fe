//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and prompts.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

use prompt_api_core::prompt::Prompt;
use prompt_api_core::storage::RepositoryError;

use super::keys;

/// Convert a Prompt to DynamoDB item.
pub fn prompt_to_item(prompt: &Prompt) -> HashMap<String, AttributeValue> {
    let mut item = keys::prompt_key(&prompt.reference, &prompt.versioning);
    item.insert(
        keys::CONTENT.to_string(),
        AttributeValue::S(prompt.content.clone()),
    );
    item.insert(
        keys::CREATED_AT.to_string(),
        AttributeValue::S(prompt.created_at.to_rfc3339()),
    );
    item
}

/// Convert a DynamoDB item to Prompt.
pub fn item_to_prompt(item: &HashMap<String, AttributeValue>) -> Result<Prompt, RepositoryError> {
    Ok(Prompt {
        reference: get_string(item, keys::REFERENCE)?,
        versioning: get_string(item, keys::VERSIONING)?,
        content: get_string(item, keys::CONTENT)?,
        created_at: get_datetime(item, keys::CREATED_AT)?,
    })
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prompt() -> Prompt {
        Prompt::new("greeting", "0001", "Hello, {name}!").with_created_at(
            DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn test_prompt_to_item_layout() {
        let item = prompt_to_item(&sample_prompt());

        assert_eq!(item.len(), 4);
        assert_eq!(item["reference"].as_s().unwrap(), "greeting");
        assert_eq!(item["versioning"].as_s().unwrap(), "0001");
        assert_eq!(item["content"].as_s().unwrap(), "Hello, {name}!");
        assert_eq!(item["createdAt"].as_s().unwrap(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_item_to_prompt() {
        let prompt = sample_prompt();
        let item = prompt_to_item(&prompt);

        assert_eq!(item_to_prompt(&item).unwrap(), prompt);
    }

    #[test]
    fn test_item_missing_content_is_invalid_data() {
        let mut item = prompt_to_item(&sample_prompt());
        item.remove("content");

        let err = item_to_prompt(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: content".to_string())
        );
    }

    #[test]
    fn test_item_with_non_string_attribute_is_invalid_data() {
        let mut item = prompt_to_item(&sample_prompt());
        item.insert("versioning".to_string(), AttributeValue::N("1".to_string()));

        assert!(matches!(
            item_to_prompt(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_item_with_bad_timestamp_is_invalid_data() {
        let mut item = prompt_to_item(&sample_prompt());
        item.insert(
            "createdAt".to_string(),
            AttributeValue::S("last tuesday".to_string()),
        );

        assert!(matches!(
            item_to_prompt(&item),
            Err(RepositoryError::InvalidData(msg)) if msg.starts_with("Invalid datetime createdAt")
        ));
    }
}
