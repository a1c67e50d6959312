//! Failures of a registration submission.
//!
//! Callers that only need to show something to the user go through
//! [`SubmitError::user_message`]; the variants exist for logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a complete response
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status
    #[error("Registration rejected: {status} - {message}")]
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// Single line shown as the form-level failure message.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => message.clone(),
            SubmitError::Client(_) | SubmitError::Connection { .. } => {
                "Could not reach the registration server".to_string()
            }
            SubmitError::Timeout { .. } => "The registration server did not respond in time".to_string(),
        }
    }

    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Client(_) => "client",
            SubmitError::Connection { .. } => "connection",
            SubmitError::Timeout { .. } => "timeout",
            SubmitError::Rejected { .. } => "rejected",
        }
    }
}
