use thiserror::Error;

/// Errors that can occur when validating a prompt key or version token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Prompt reference cannot be empty")]
    EmptyReference,
    #[error("Prompt versioning cannot be empty")]
    EmptyVersioning,
    #[error("Versioning token '{0}' is reserved")]
    ReservedVersioning(String),
    #[error("Invalid semantic version '{0}': expected MAJOR.MINOR.PATCH with 1-4 digits each")]
    InvalidSemver(String),
}
