mod error;
mod operations;
mod requests;
mod types;
mod versioning;

pub use error::PromptError;
pub use operations::{
    latest_of, sort_by_versioning, validate_key, validate_reference, RESERVED_VERSIONING,
};
pub use requests::WritePromptRequest;
pub use types::Prompt;
pub use versioning::{decode_semver, encode_semver};
