//! Error types for search command execution
//!
//! All errors raised by commands, the dispatcher and backends are represented
//! by the [`Error`] enum. We use `thiserror` for `Display` and `Error`.
//!
//! Every variant belongs to one [`ErrorKind`]:
//! - **Runtime**: a condition of the environment (wrong or missing backend,
//!   backend failure, bad config). The caller may react, e.g. re-dispatch.
//! - **Logic**: a caller ordering bug. Never retried.

use serde::{Deserialize, Serialize};

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Environmental failure
    Runtime,
    /// Programming error in the caller
    Logic,
}

/// Search command errors
///
/// # Example
///
/// ```
/// use vufind_search_core::{Error, ErrorKind};
///
/// let err = Error::BackendMismatch {
///     expected: "BrowZine".into(),
///     actual: "WorldCat".into(),
/// };
/// assert_eq!(err.kind(), ErrorKind::Runtime);
/// assert!(err.to_string().contains("BrowZine"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Dispatch ====================
    /// Command was executed against a backend other than its target
    #[error("mismatched backend: command expects {expected}, got {actual}")]
    BackendMismatch { expected: String, actual: String },

    /// No backend is registered under the identifier
    #[error("backend not found: {backend}")]
    BackendNotFound { backend: String },

    /// Backend does not implement the capability the command needs
    #[error("backend {backend} does not support {operation}")]
    UnsupportedOperation { backend: String, operation: String },

    // ==================== Command State ====================
    /// Result was read before the command ran
    #[error("command {command} has not yet been executed")]
    NotYetExecuted { command: String },

    /// Command was executed a second time under the reject policy
    #[error("command {command} has already been executed")]
    AlreadyExecuted { command: String },

    // ==================== Backend ====================
    /// Failure raised by a backend while serving a command
    #[error("backend {backend} failed: {reason}")]
    Backend { backend: String, reason: String },

    // ==================== Configuration ====================
    /// Configuration could not be read or holds invalid values
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Build a backend failure
    pub fn backend(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Backend {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    /// Build a config failure
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotYetExecuted { .. } | Error::AlreadyExecuted { .. } => ErrorKind::Logic,
            Error::BackendMismatch { .. }
            | Error::BackendNotFound { .. }
            | Error::UnsupportedOperation { .. }
            | Error::Backend { .. }
            | Error::InvalidConfig { .. } => ErrorKind::Runtime,
        }
    }

    /// Whether this is a caller ordering bug
    pub fn is_logic_error(&self) -> bool {
        self.kind() == ErrorKind::Logic
    }
}
