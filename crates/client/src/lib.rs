//! prompt_api_client - HTTP client and CLI for the prompt API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::PromptClient;
pub use error::{ClientError, Result};
