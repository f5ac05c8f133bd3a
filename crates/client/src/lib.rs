//! Task Manager Client
//!
//! Mirrors the server's task collection locally and derives the filtered,
//! searched view from it. Mutations go through the API and are followed by
//! a full refetch; nothing is updated optimistically.

pub mod api;
pub mod config;
mod error;
pub mod filter;
pub mod form;
pub mod manager;
pub mod state;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use config::ClientConfig;
pub use error::{ClientError, FormError, Result};
pub use filter::{visible_tasks, StatusCounts, StatusFilter};
pub use form::{TaskDraft, TaskForm};
pub use manager::{Outcome, TaskManager};
pub use state::TaskManagerState;
