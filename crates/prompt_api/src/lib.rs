//! Prompt versioning service.
//!
//! Stores prompts keyed by `(reference, versioning)` and serves them over a
//! single `/prompt` proxy route. The same request handler runs behind the
//! axum server (`prompt-api`) and behind an API Gateway proxy on AWS Lambda
//! (`prompt-api-lambda`, feature `lambda`).

pub mod app;
pub mod config;
pub mod handlers;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod state;
pub mod storage;
