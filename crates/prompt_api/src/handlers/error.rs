use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use prompt_api_core::prompt::PromptError;
use prompt_api_core::routing::RouteError;
use prompt_api_core::storage::{is_retryable, repository_error_to_status_code, RepositoryError};

/// Every failure a prompt request can end in.
///
/// Carries enough detail for logs; `public_message` decides what the
/// caller sees.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
    #[error("Storage call exceeded {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Timeout(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Server faults never leak backend detail.
    pub fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::SERVICE_UNAVAILABLE => "storage temporarily unavailable".to_string(),
            StatusCode::BAD_GATEWAY => "storage request failed".to_string(),
            status if status.is_server_error() => "internal error".to_string(),
            _ => self.to_string(),
        }
    }

    /// JSON body shared by every transport.
    pub fn body(&self) -> Value {
        json!({ "error": self.public_message() })
    }

    /// Logs the error at a level matching its severity.
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            let retryable = matches!(self, Self::Storage(err) if is_retryable(err));
            tracing::error!(
                status = status.as_u16(),
                retryable,
                error = %self,
                "Prompt request failed"
            );
        } else if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self, "Prompt not found");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Prompt request rejected");
        }
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NotFound { .. } => Self::NotFound(err.to_string()),
            RouteError::InvalidSegment(_) => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<PromptError> for ApiError {
    fn from(err: PromptError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_use_repository_mapping() {
        let cases = [
            (RepositoryError::Unavailable("throttled".into()), 503),
            (RepositoryError::QueryFailed("no table".into()), 502),
            (RepositoryError::InvalidData("corrupt".into()), 500),
            (
                RepositoryError::AlreadyExists {
                    entity_type: "Prompt",
                    id: "greeting/0001".into(),
                },
                409,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_server_errors_hide_backend_detail() {
        let err = ApiError::from(RepositoryError::QueryFailed(
            "arn:aws:dynamodb:us-east-1:123:table/Prompts not found".into(),
        ));
        assert_eq!(err.body(), json!({"error": "storage request failed"}));

        let err = ApiError::Timeout(Duration::from_secs(2));
        assert_eq!(err.body(), json!({"error": "internal error"}));

        let err = ApiError::from(RepositoryError::Unavailable("busy".into()));
        assert_eq!(err.body(), json!({"error": "storage temporarily unavailable"}));
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = ApiError::from(PromptError::ReservedVersioning("versions".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            json!({"error": "Versioning token 'versions' is reserved"})
        );
    }

    #[test]
    fn test_route_errors() {
        let err = ApiError::from(RouteError::NotFound {
            method: "DELETE".into(),
            path: "/prompt/greeting".into(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::from(RouteError::InvalidSegment("%FF".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
