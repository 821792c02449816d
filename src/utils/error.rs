//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the control-plane API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("Request throttled by the control plane")]
    Throttled,
}

/// Errors that can occur during event monitoring
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Stack identifier is empty")]
    MissingStackId,

    #[error("Failed to fetch events for stack {stack_id}: {source}")]
    EventFetch {
        stack_id: String,
        #[source]
        source: ApiError,
    },

    #[error("No events recorded anywhere in the stack tree")]
    NoEvents,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
