//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `prompt_api_core::storage`.
//! Throttling, server faults and transport failures become `Unavailable` so
//! callers can tell retryable faults apart from hard rejections.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use prompt_api_core::storage::RepositoryError;

/// Maps failures that never reached the service (no response, timeout).
///
/// Returns the error back when the service did answer.
fn transport_error<E, R>(err: SdkError<E, R>) -> Result<RepositoryError, SdkError<E, R>> {
    match err {
        SdkError::DispatchFailure(e) => Ok(RepositoryError::Unavailable(format!(
            "Dispatch failure: {e:?}"
        ))),
        SdkError::TimeoutError(_) => Ok(RepositoryError::Unavailable(
            "DynamoDB request timed out".to_string(),
        )),
        other => Err(other),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    let err = match transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    let err = match transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed `attribute_not_exists` condition means the key is taken.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let err = match transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => RepositoryError::AlreadyExists {
            entity_type,
            id: id.into(),
        },
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::Unavailable("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::Unavailable("DynamoDB internal server error".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ProvisionedThroughputExceededException,
        ResourceNotFoundException,
    };

    #[test]
    fn test_conditional_check_failed_maps_to_already_exists() {
        let err = SdkError::<PutItemError, ()>::service_error(
            PutItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder().build(),
            ),
            (),
        );

        let result = map_put_item_error(err, "Prompt", "greeting/0001");

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Prompt",
                id: "greeting/0001".to_string(),
            }
        );
    }

    #[test]
    fn test_throttling_maps_to_unavailable() {
        let err = SdkError::<QueryError, ()>::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        assert!(matches!(
            map_query_error(err),
            RepositoryError::Unavailable(_)
        ));
    }

    #[test]
    fn test_missing_table_maps_to_query_failed() {
        let err = SdkError::<GetItemError, ()>::service_error(
            GetItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );

        assert_eq!(
            map_get_item_error(err),
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }

    #[test]
    fn test_timeout_maps_to_unavailable() {
        let err = SdkError::<GetItemError, ()>::timeout_error("connect timeout");

        assert!(matches!(
            map_get_item_error(err),
            RepositoryError::Unavailable(_)
        ));
    }
}
