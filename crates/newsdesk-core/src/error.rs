//! Error types for the newsdesk workflow core.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all newsroom operations.
///
/// The variants follow the failure taxonomy enforced at the request guard
/// boundary: local validation failures (no request issued), authentication
/// failures (reported through a rate-limited notice), remote rejections
/// carrying server detail text, and transport/decode failures with no usable
/// server response.
#[derive(Error, Debug)]
pub enum NewsroomError {
    /// Required input missing or malformed; caught before any network call
    #[error("Invalid input for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// The server rejected the credentials (or their absence)
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// An item id was not matched by the server or the loaded plan
    #[error("No item with id '{id}' in this plan")]
    ItemNotFound { id: String },

    /// Any other non-success response from the plan service
    #[error("Server error ({status}): {detail}")]
    Remote { status: u16, detail: String },

    /// Network failure with no server response
    #[error("Network error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Response body that could not be decoded as the expected shape
    #[error("Malformed server response: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    /// Local file errors (CSV to import, token store, exports)
    #[error("File error at '{path}': {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Another guarded operation is already in flight
    #[error("Another operation is in flight; wait for it to finish")]
    Busy,
}

impl NewsroomError {
    /// Creates a validation error for a named input field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a file error with the offending path attached.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// True for failures that indicate missing or invalid credentials.
    ///
    /// These are reported through a rate-limited notice rather than a hard
    /// error per attempt.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// The human-readable line reported through the notification channel.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for newsroom operations
pub type Result<T> = std::result::Result<T, NewsroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_names_the_field() {
        let err = NewsroomError::validation("date", "missing");
        assert!(err.user_message().contains("date"));
        assert!(!err.is_auth());
    }

    #[test]
    fn auth_is_distinguished() {
        let err = NewsroomError::Auth {
            message: "Invalid or missing x-auth token".to_string(),
        };
        assert!(err.is_auth());
    }
}
