//! Transport-agnostic prompt request handler.
//!
//! Both the axum app and the Lambda entry point turn their native request
//! into a [`PromptRequest`] and render the resulting [`PromptResponse`] or
//! [`ApiError`] back into their own response type.

use std::{future::Future, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use prompt_api_core::prompt::{validate_key, validate_reference, Prompt, WritePromptRequest};
use prompt_api_core::routing::Route;
use prompt_api_core::storage::{PromptRepository, RepositoryError};

use super::ApiError;

/// A routed prompt request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub route: Route,
    pub body: Vec<u8>,
    /// Write only if the key is unused (`If-None-Match: *`).
    pub create_only: bool,
}

impl PromptRequest {
    pub fn new(route: Route, body: impl Into<Vec<u8>>) -> Self {
        Self {
            route,
            body: body.into(),
            create_only: false,
        }
    }

    pub fn create_only(mut self, create_only: bool) -> Self {
        self.create_only = create_only;
        self
    }
}

/// A successful prompt response.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl PromptResponse {
    fn json(status: StatusCode, body: &impl Serialize) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Internal(format!("Failed to encode response: {e}")))?;
        Ok(Self { status, body })
    }
}

impl IntoResponse for PromptResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Returns true for an `If-None-Match` value asking for create-only semantics.
pub fn is_create_only(if_none_match: Option<&str>) -> bool {
    if_none_match.is_some_and(|value| value.trim() == "*")
}

/// Runs one storage call under `timeout`.
async fn with_deadline<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, RepositoryError>>,
) -> Result<T, ApiError> {
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| ApiError::Timeout(timeout))?
        .map_err(ApiError::from)
}

/// Executes a routed request against the repository.
///
/// Issues at most one storage call. A write body that is not a JSON object
/// with a string `content` is rejected before storage is touched.
pub async fn handle_prompt_request(
    repository: &dyn PromptRepository,
    request: PromptRequest,
    timeout: Duration,
) -> Result<PromptResponse, ApiError> {
    match request.route {
        Route::Latest { reference } => {
            validate_reference(&reference)?;
            tracing::debug!(%reference, "Fetching latest prompt");

            let prompt = with_deadline(timeout, repository.latest_prompt(&reference))
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Prompt '{reference}' not found")))?;
            PromptResponse::json(StatusCode::OK, &prompt)
        }
        Route::Get {
            reference,
            versioning,
        } => {
            validate_reference(&reference)?;
            tracing::debug!(%reference, %versioning, "Fetching prompt version");

            let prompt = with_deadline(timeout, repository.get_prompt(&reference, &versioning))
                .await?
                .ok_or_else(|| {
                    ApiError::NotFound(format!("Prompt '{reference}/{versioning}' not found"))
                })?;
            PromptResponse::json(StatusCode::OK, &prompt)
        }
        Route::Versions { reference } => {
            validate_reference(&reference)?;
            tracing::debug!(%reference, "Listing prompt versions");

            let prompts: Vec<Prompt> =
                with_deadline(timeout, repository.query_by_reference(&reference)).await?;
            PromptResponse::json(StatusCode::OK, &prompts)
        }
        Route::Put {
            reference,
            versioning,
        } => {
            validate_key(&reference, &versioning)?;
            let payload = WritePromptRequest::from_json(&request.body)
                .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?;
            let prompt = payload.into_prompt(reference, versioning);

            if request.create_only {
                with_deadline(timeout, repository.put_prompt_if_absent(&prompt)).await?;
            } else {
                with_deadline(timeout, repository.put_prompt(&prompt)).await?;
            }

            tracing::info!(
                reference = %prompt.reference,
                versioning = %prompt.versioning,
                create_only = request.create_only,
                "Stored prompt"
            );
            PromptResponse::json(StatusCode::CREATED, &prompt)
        }
    }
}
