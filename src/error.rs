//! Error types for the Ghostwriter library.
//!
//! All fallible operations return [`GhostwriterError`] through the [`Result`]
//! alias. Each variant belongs to one class of the error taxonomy and maps to
//! exactly one HTTP status through [`GhostwriterError::status_code`].
//!
//! # Examples
//!
//! ```
//! use ghostwriter::error::{GhostwriterError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GhostwriterError::invalid_input("missing field 'text'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.status_code(), 400),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Ghostwriter operations.
#[derive(Error, Debug)]
pub enum GhostwriterError {
    /// The requested character range does not fit the text.
    #[error("Invalid start/end indices: {start}-{end} for a text of {len} characters")]
    InvalidRange { start: i64, end: i64, len: usize },

    /// No token matches the requested range, or the matched token is not the expected word.
    #[error("Could not find token for word '{word}' at indices {start}-{end}")]
    TokenNotFound { word: String, start: i64, end: i64 },

    /// Malformed or missing request data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The tagger (or another required backend) is not loaded.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A requested entry does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The lexical database failed while answering a query.
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Analysis-related errors (tokenization, tagging, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (dictionary files, lexicons, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with GhostwriterError.
pub type Result<T> = std::result::Result<T, GhostwriterError>;

impl GhostwriterError {
    /// Create a new invalid range error.
    pub fn invalid_range(start: i64, end: i64, len: usize) -> Self {
        GhostwriterError::InvalidRange { start, end, len }
    }

    /// Create a new token-not-found error.
    pub fn token_not_found<S: Into<String>>(word: S, start: i64, end: i64) -> Self {
        GhostwriterError::TokenNotFound {
            word: word.into(),
            start,
            end,
        }
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::InvalidInput(msg.into())
    }

    /// Create a new service unavailable error.
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::ServiceUnavailable(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::NotFound(msg.into())
    }

    /// Create a new lookup error.
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::Lookup(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GhostwriterError::Other(msg.into())
    }

    /// Whether the error was caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// HTTP status class of this error.
    pub fn status_code(&self) -> u16 {
        match self {
            GhostwriterError::InvalidRange { .. }
            | GhostwriterError::TokenNotFound { .. }
            | GhostwriterError::InvalidInput(_) => 400,
            GhostwriterError::NotFound(_) => 404,
            GhostwriterError::Json(_) => 422,
            GhostwriterError::ServiceUnavailable(_) => 503,
            GhostwriterError::Lookup(_)
            | GhostwriterError::Analysis(_)
            | GhostwriterError::Config(_)
            | GhostwriterError::Io(_)
            | GhostwriterError::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GhostwriterError::invalid_range(100, 200, 29);
        assert_eq!(
            error.to_string(),
            "Invalid start/end indices: 100-200 for a text of 29 characters"
        );

        let error = GhostwriterError::token_not_found("brown", 4, 9);
        assert_eq!(
            error.to_string(),
            "Could not find token for word 'brown' at indices 4-9"
        );

        let error = GhostwriterError::lookup("index corrupted");
        assert_eq!(error.to_string(), "Lookup error: index corrupted");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GhostwriterError::invalid_range(0, 0, 0).status_code(), 400);
        assert_eq!(GhostwriterError::not_found("happy").status_code(), 404);
        assert_eq!(GhostwriterError::unavailable("tagger").status_code(), 503);
        assert_eq!(GhostwriterError::lookup("boom").status_code(), 500);
        assert!(GhostwriterError::invalid_input("x").is_client_error());
        assert!(!GhostwriterError::other("x").is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = GhostwriterError::from(io_error);

        match error {
            GhostwriterError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
