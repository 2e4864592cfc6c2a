//! # Keyforge Key Generation
//!
//! Secure random strings, keys and identifiers.
//!
//! ## Features
//!
//! - **Charset encoding**: random bytes mapped onto an alphabet
//! - **Eleven generators**: passwords, API keys, secrets, UUIDs, MAC addresses and more
//! - **Pluggable randomness**: OS CSPRNG by default, seeded sources for reproducible output
//!
//! ## Quick Start
//!
//! ```rust
//! use keyforge_key::{Generate, GeneratorKind};
//!
//! # fn main() -> Result<(), keyforge_key::KeyError> {
//! let password = Generate::kind(GeneratorKind::Password)
//!     .length(24)
//!     .with_symbols(false)
//!     .generate()?;
//! assert_eq!(password.len(), 24);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod charset;
pub mod entropy;
pub mod error;
pub mod generators;
pub mod options;
pub mod strength;

pub use api::{Generate, GeneratorBuilder, GeneratorKind, PLACEHOLDER, generate_or_placeholder};
pub use charset::Charset;
pub use entropy::{RandomSource, SeededRandom, SystemRandom};
pub use error::{KeyError, Result};
pub use options::{GeneratorOptions, MacFormat, StringFormat, UuidVersion};
pub use strength::{Strength, estimate_bits};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Generate, GeneratorKind, GeneratorOptions, KeyError, RandomSource, Result, SeededRandom,
        SystemRandom,
    };
}
