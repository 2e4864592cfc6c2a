//! Caller-facing API: registry, builder and the placeholder wrapper

pub mod builder;
pub mod kind;

pub use builder::{Generate, GeneratorBuilder};
pub use kind::GeneratorKind;

use crate::options::GeneratorOptions;
use keyforge_common::LoggingTransformer;

/// Text shown in place of a value when generation fails
pub const PLACEHOLDER: &str = "Error generating key";

/// Generate, or log the failure and return [`PLACEHOLDER`]
#[must_use]
pub fn generate_or_placeholder(kind: GeneratorKind, options: &GeneratorOptions) -> String {
    kind.generate(options).unwrap_or_else(|e| {
        LoggingTransformer::log_generation_error(kind.id(), &e);
        PLACEHOLDER.to_owned()
    })
}
