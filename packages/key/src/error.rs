//! Error handling for the generator module

use thiserror::Error;

/// Generator-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A charset with no characters cannot encode anything
    #[error("Charset is empty")]
    EmptyCharset,

    /// Requested length is outside what the generator accepts
    #[error("Invalid length: {length} (maximum {max})")]
    InvalidLength {
        /// Requested length
        length: usize,
        /// Largest accepted length
        max: usize,
    },

    /// An option carried a value the generator does not understand
    #[error("Invalid value for option '{option}': {value}")]
    InvalidOption {
        /// Option name
        option: &'static str,
        /// Rejected value
        value: String,
    },

    /// No generator is registered under the given id
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),
}

impl KeyError {
    /// Create an `InvalidOption` error
    pub fn invalid_option(option: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            value: value.into(),
        }
    }
}

impl From<KeyError> for keyforge_common::Error {
    fn from(err: KeyError) -> Self {
        keyforge_common::Error::with_source(keyforge_common::ErrorKind::Validation, err)
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, KeyError>;
