//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `prompt_api_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use prompt_api_core::prompt::Prompt;
use prompt_api_core::storage::{PromptRepository, Result};

use super::conversions::{item_to_prompt, prompt_to_item};
use super::error::{map_get_item_error, map_put_item_error, map_query_error};
use super::keys;

/// DynamoDB-based repository implementation.
///
/// The client is built once and reused across requests.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the AWS default configuration chain.
    ///
    /// `endpoint_url` points the client at a local DynamoDB when set.
    pub async fn from_config(table_name: &str, endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(url) = endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let config = loader.load().await;

        Self::new(Client::new(&config), table_name)
    }

    /// Starts a partition query on `reference`.
    fn query_reference(
        &self,
        reference: &str,
    ) -> aws_sdk_dynamodb::operation::query::builders::QueryFluentBuilder {
        self.client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :reference")
            .expression_attribute_names("#pk", keys::REFERENCE)
            .expression_attribute_values(":reference", AttributeValue::S(reference.to_string()))
            .consistent_read(true)
    }
}

#[async_trait]
impl PromptRepository for DynamoDbRepository {
    async fn get_prompt(&self, reference: &str, versioning: &str) -> Result<Option<Prompt>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::prompt_key(reference, versioning)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_prompt(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_prompt(&self, prompt: &Prompt) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(prompt_to_item(prompt)))
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(
                    e,
                    "Prompt",
                    keys::prompt_id(&prompt.reference, &prompt.versioning),
                )
            })?;

        Ok(())
    }

    async fn put_prompt_if_absent(&self, prompt: &Prompt) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(prompt_to_item(prompt)))
            .condition_expression("attribute_not_exists(#sk)")
            .expression_attribute_names("#sk", keys::VERSIONING)
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(
                    e,
                    "Prompt",
                    keys::prompt_id(&prompt.reference, &prompt.versioning),
                )
            })?;

        Ok(())
    }

    async fn query_by_reference(&self, reference: &str) -> Result<Vec<Prompt>> {
        let items: Vec<_> = self
            .query_reference(reference)
            .scan_index_forward(true)
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(map_query_error)?;

        items.iter().map(item_to_prompt).collect()
    }

    async fn latest_prompt(&self, reference: &str) -> Result<Option<Prompt>> {
        let result = self
            .query_reference(reference)
            .scan_index_forward(false)
            .limit(1)
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.first().map(item_to_prompt).transpose()
    }
}
