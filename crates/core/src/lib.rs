//! Core library for the task manager
//!
//! This crate contains the pieces shared by the API server and the client:
//! - The `Task` document and its status enum
//! - The typed request schema and its validation
//! - The repository trait and the JSON-file document store

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
