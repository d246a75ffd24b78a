// Error types for the ngx-admin e2e suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the ngx-admin pages
#[derive(Debug, Error)]
pub enum Error {
    /// Element is not rendered, so its bounding box cannot be obtained
    ///
    /// Raised by geometry-dependent operations (e.g. the temperature
    /// slider drive) instead of proceeding with undefined coordinates.
    #[error("Element '{selector}' is not rendered: bounding box unavailable")]
    ElementNotRendered { selector: String },

    /// Timed out polling for a condition
    ///
    /// Carries what was being awaited and how long the poll ran.
    #[error("Timed out after {timeout:?} waiting for {what}")]
    Timeout {
        what: String,
        timeout: std::time::Duration,
    },

    /// No test-user credentials could be resolved
    ///
    /// Neither the environment overrides, the fixture store, nor the
    /// fallback defaults yielded an email/password pair.
    #[error(
        "No test-user credentials available. \
        Set TEST_USER_EMAIL/TEST_USER_PASSWORD or register a user first."
    )]
    MissingCredentials,

    /// Underlying browser-automation error
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// I/O error (fixture file, .env append)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
