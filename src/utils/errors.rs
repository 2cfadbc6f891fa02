//! Error handling for rubot
//!
//! This module defines the main error types used throughout the application,
//! including the chatlist loading and validation failures that abort startup.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rubot
#[derive(Error, Debug)]
pub enum RubotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Chatlist error: {0}")]
    Chatlist(#[from] ChatlistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading the chatlist file.
///
/// A missing file and a malformed one are reported separately so the
/// operator knows whether to create the file or fix its contents.
#[derive(Error, Debug)]
pub enum ChatlistError {
    #[error("chatlist file not found at {}; create it or set RUBOT__CHATLIST__PATH", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read chatlist file {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chatlist file {} is not valid JSON: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid chatlist: {0}")]
    Invalid(#[from] ValidationError),
}

/// Shape violations found in a chatlist document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("chatlist must be a JSON array, found {found}")]
    NotAList { found: &'static str },

    #[error("entry #{index} must be an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("entry #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("entry #{index} field `{field}` must be {expected}, found {found}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("entry #{index} repeats chat id {id} already listed at entry #{first}")]
    DuplicateId { index: usize, id: i64, first: usize },
}

impl ValidationError {
    /// Index of the offending entry, if the failure is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::NotAList { .. } => None,
            ValidationError::NotAnObject { index, .. }
            | ValidationError::MissingField { index, .. }
            | ValidationError::InvalidField { index, .. }
            | ValidationError::DuplicateId { index, .. } => Some(*index),
        }
    }

    /// Name of the offending field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::InvalidField { field, .. } => Some(*field),
            ValidationError::DuplicateId { .. } => Some("id"),
            _ => None,
        }
    }
}

/// Result type alias for rubot operations
pub type Result<T> = std::result::Result<T, RubotError>;

impl RubotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            RubotError::Telegram(_) => true,
            RubotError::Chatlist(_) => false,
            RubotError::Config(_) => false,
            RubotError::MissingConfig(_) => false,
            RubotError::PermissionDenied(_) => false,
            RubotError::ServiceUnavailable(_) => true,
            RubotError::Serialization(_) => false,
            RubotError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RubotError::Chatlist(_) => ErrorSeverity::Critical,
            RubotError::Config(_) => ErrorSeverity::Critical,
            RubotError::MissingConfig(_) => ErrorSeverity::Critical,
            RubotError::PermissionDenied(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
