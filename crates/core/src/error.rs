//! Fetch failures
//!
//! The consumer never branches on the failure kind; it only ever sees
//! [`FetchError::message`], which is guaranteed to be non-empty.

/// Message used when a failure carries no text of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure of a single fetch of the record list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No usable response: connectivity, timeout, or an undecodable body.
    #[error("{}", or_unknown(.0))]
    Transport(String),

    /// A response arrived with a non-2xx status.
    #[error("{}", or_unknown(.body))]
    Response { status: u16, body: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport(message.into())
    }

    /// Build a response error, substituting [`UNKNOWN_ERROR`] for a blank body
    pub fn response(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = if body.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            body
        };
        FetchError::Response { status, body }
    }

    /// Text published on the error path
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport(_) => None,
            FetchError::Response { status, .. } => Some(*status),
        }
    }
}

fn or_unknown(text: &str) -> &str {
    if text.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        text
    }
}
