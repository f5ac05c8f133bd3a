//! Error types for the task manager client

use thiserror::Error;

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures of a call against the task API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not what the API promises
    #[error("Invalid response: {message}")]
    Decode { message: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Blocking notification raised by the edit form before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required!")]
    TitleRequired,

    #[error("Description is required!")]
    DescriptionRequired,
}
