//! Error handling with context propagation
//!
//! Provides:
//! - Structured error kinds with thiserror
//! - Context attachment for debugging
//! - Backtrace capture behind the `full-backtrace` feature

pub mod constructors;
pub mod display;
pub mod logging;
pub mod macros;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::{Error, ErrorKind, Result};
