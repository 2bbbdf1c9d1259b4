//! Error types for the Yubin library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`YubinError`] enum.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Yubin operations.
#[derive(Error, Debug)]
pub enum YubinError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV record parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with YubinError.
pub type Result<T> = std::result::Result<T, YubinError>;

impl YubinError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        YubinError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        YubinError::Index(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        YubinError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        YubinError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        YubinError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
