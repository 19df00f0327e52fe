//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `AlreadyExists` -> 409 (Conflict)
/// - `Unavailable` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 502 (Bad Gateway)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// `InvalidData` describes a corrupt stored item, not a bad request, so it
/// is a server fault.
///
/// # Examples
///
/// ```
/// use prompt_api_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::Unavailable("throttled".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::Unavailable(_) => 503,
        RepositoryError::QueryFailed(_) => 502,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Returns true when the caller may retry the failed operation.
pub fn is_retryable(error: &RepositoryError) -> bool {
    matches!(error, RepositoryError::Unavailable(_))
}
