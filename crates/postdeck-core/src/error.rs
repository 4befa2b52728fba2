//! Application error types with display-ready messages

use thiserror::Error;

use crate::types::PostId;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // API Transport Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Request failed: {message}")]
    Fetch { message: String },

    #[error("Unexpected response shape: {message}")]
    DataFormat { message: String },

    // ─────────────────────────────────────────────────────────────
    // Action Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input: {message}")]
    Validation { message: String },

    #[error("A comment for post {post_id} is already being submitted")]
    CommentPending { post_id: PostId },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Invalid API base URL: {message}")]
    Url { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn data_format(message: impl Into<String>) -> Self {
        Self::DataFormat {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn url(message: impl Into<String>) -> Self {
        Self::Url {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are local to the action that triggered them; the
    /// already-rendered state stays valid and the action can be retried by
    /// an explicit new call.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. }
                | Error::DataFormat { .. }
                | Error::Validation { .. }
                | Error::CommentPending { .. }
        )
    }

    /// Check if this error should terminate the client
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::ConfigInvalid { .. } | Error::Url { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::fetch("GET posts/getAll: HTTP 500");
        assert_eq!(err.to_string(), "Request failed: GET posts/getAll: HTTP 500");

        let err = Error::validation("comment text must not be empty");
        assert!(err.to_string().contains("comment text"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::config("no home directory").is_fatal());
        assert!(Error::url("not a base").is_fatal());
        assert!(!Error::fetch("timeout").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::fetch("timeout").is_recoverable());
        assert!(Error::data_format("expected an array").is_recoverable());
        assert!(Error::validation("empty comment").is_recoverable());
        assert!(Error::CommentPending { post_id: 7 }.is_recoverable());
        assert!(!Error::config_invalid("bad toml").is_recoverable());
    }

    #[test]
    fn test_comment_pending_names_the_post() {
        let err = Error::CommentPending { post_id: 42 };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_result_ext_context_passes_values_and_errors_through() {
        let ok: std::result::Result<i32, std::io::Error> = Ok(5);
        assert_eq!(ok.context("reading").unwrap(), 5);

        let err: std::result::Result<i32, std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err.context("reading").unwrap_err(), Error::Io(_)));
    }
}
