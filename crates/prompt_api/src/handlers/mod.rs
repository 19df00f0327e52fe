pub mod error;
pub mod health;
pub mod prompts;

pub use error::ApiError;
pub use prompts::{handle_prompt_request, PromptRequest, PromptResponse};
