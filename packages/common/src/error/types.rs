//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// I/O related errors
    #[error("I/O error")]
    Io,

    /// Configuration file or flag errors
    #[error("Configuration error")]
    Configuration,

    /// Invalid user input
    #[error("Validation error")]
    Validation,

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
