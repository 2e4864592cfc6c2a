//! Error constructors and methods

use super::types::{Error, ErrorInner, ErrorKind};
use std::fmt;
use std::sync::Arc;

impl Error {
    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source: None,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Create an error with a source error
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source: Some(Box::new(source)),
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Add context to this error, keeping the original as its source
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        let kind = self.inner.kind.clone();
        let source: Option<Box<dyn std::error::Error + Send + Sync>> =
            if self.inner.source.is_some() || self.inner.context.is_some() {
                Some(Box::new(self))
            } else {
                None
            };
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: Some(context.to_string()),
                source,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Create a validation error
    #[must_use]
    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Create an error with a free-form message
    #[must_use]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other(msg.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, err)
    }
}
