//! Typed failures for admin API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every call site receives an `ApiError` instead of a panic. Mutation
//! failures are shown to the admin through `payload()`, which never assumes
//! the server sent a body: it falls back to the HTTP status or the transport
//! message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse failure category retained in view state after a failed list load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Rejected,
    Decode,
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
    /// A success response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// HTTP calls only run in the hydrated browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::Rejected { .. } => FailureKind::Rejected,
            Self::Decode(_) => FailureKind::Decode,
            Self::Unavailable => FailureKind::Unavailable,
        }
    }

    /// Text suitable for a failure acknowledgment.
    pub fn payload(&self) -> String {
        match self {
            Self::Rejected { status, body } => {
                let text = error_payload_text(body);
                if text.is_empty() { format!("HTTP {status}") } else { text }
            }
            Self::Transport(message) | Self::Decode(message) => message.clone(),
            Self::Unavailable => self.to_string(),
        }
    }
}

/// Unquote JSON string bodies; pass any other body through trimmed.
pub(crate) fn error_payload_text(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<String>(trimmed) {
        Ok(text) => text.trim().to_owned(),
        Err(_) => trimmed.to_owned(),
    }
}
