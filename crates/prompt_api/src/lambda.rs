//! API Gateway proxy binding for AWS Lambda.
//!
//! Converts a REST API proxy event into a [`PromptRequest`] and the outcome
//! back into a `{statusCode, headers, body}` response. Paths in these events
//! are already URL-decoded.

use std::{collections::HashMap, time::Duration};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use prompt_api_core::routing::parse_decoded_route;
use prompt_api_core::storage::PromptRepository;

use crate::handlers::{
    handle_prompt_request, prompts::is_create_only, ApiError, PromptRequest, PromptResponse,
};

/// The subset of an API Gateway REST proxy event the service reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyRequest {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ApiGatewayProxyRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Raw body bytes, decoding base64 when the event says so.
    pub fn body_bytes(&self) -> Result<Vec<u8>, ApiError> {
        match (&self.body, self.is_base64_encoded) {
            (None, _) => Ok(Vec::new()),
            (Some(body), false) => Ok(body.clone().into_bytes()),
            (Some(body), true) => STANDARD
                .decode(body)
                .map_err(|e| ApiError::BadRequest(format!("Invalid base64 body: {e}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl From<PromptResponse> for ApiGatewayResponse {
    fn from(response: PromptResponse) -> Self {
        json_response(response.status.as_u16(), &response.body)
    }
}

impl From<ApiError> for ApiGatewayResponse {
    fn from(error: ApiError) -> Self {
        error.log();
        json_response(error.status_code().as_u16(), &error.body())
    }
}

fn json_response(status_code: u16, body: &Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: body.to_string(),
    }
}

/// Handles one API Gateway proxy event.
///
/// Never fails: every error is rendered as a JSON error response.
pub async fn handle_api_gateway_event(
    repository: &dyn PromptRepository,
    event: Value,
    timeout: Duration,
) -> ApiGatewayResponse {
    match dispatch(repository, event, timeout).await {
        Ok(response) => response.into(),
        Err(error) => error.into(),
    }
}

async fn dispatch(
    repository: &dyn PromptRepository,
    event: Value,
    timeout: Duration,
) -> Result<PromptResponse, ApiError> {
    let event: ApiGatewayProxyRequest = serde_json::from_value(event)
        .map_err(|e| ApiError::BadRequest(format!("Malformed proxy event: {e}")))?;

    let route = parse_decoded_route(&event.http_method, &event.path)?;
    let request = PromptRequest::new(route, event.body_bytes()?)
        .create_only(is_create_only(event.header("if-none-match")));

    handle_prompt_request(repository, request, timeout).await
}

/// Storage budget for one invocation: the configured timeout, capped by
/// the time left before the invocation deadline.
pub fn invocation_budget(deadline_ms: u64, now_ms: u64, configured: Duration) -> Duration {
    let remaining = Duration::from_millis(deadline_ms.saturating_sub(now_ms));
    configured.min(remaining)
}
