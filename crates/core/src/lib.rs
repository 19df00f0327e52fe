//! Core for the prompt versioning service.
//!
//! Everything in this crate is I/O free: the prompt record and its
//! validation rules, the router that turns a method and path into an
//! operation, and the storage contract the server backends implement.

pub mod prompt;
pub mod routing;
pub mod storage;
