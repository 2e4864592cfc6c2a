//! Builder entry point for one-off and batch generation

use super::kind::GeneratorKind;
use crate::Result;
use crate::entropy::{RandomSource, SystemRandom};
use crate::options::GeneratorOptions;
use std::fmt;

/// Main entry point: `Generate::kind(GeneratorKind::Password)...`
pub struct Generate;

impl Generate {
    /// Start building a request for `kind`
    #[must_use]
    pub fn kind(kind: GeneratorKind) -> GeneratorBuilder {
        GeneratorBuilder {
            kind,
            options: GeneratorOptions::default(),
        }
    }
}

/// Accumulates option overrides for one generator
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    kind: GeneratorKind,
    options: GeneratorOptions,
}

impl GeneratorBuilder {
    /// Output length
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.options.length = Some(length);
        self
    }

    /// Toggle password symbols
    #[must_use]
    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.options.include_symbols = Some(enabled);
        self
    }

    /// Toggle password digits
    #[must_use]
    pub fn with_numbers(mut self, enabled: bool) -> Self {
        self.options.include_numbers = Some(enabled);
        self
    }

    /// Toggle password upper-case letters
    #[must_use]
    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.options.include_uppercase = Some(enabled);
        self
    }

    /// Toggle password lower-case letters
    #[must_use]
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.options.include_lowercase = Some(enabled);
        self
    }

    /// API key prefix
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    /// Format name, or any typed format such as [`crate::options::MacFormat`]
    #[must_use]
    pub fn format(mut self, format: impl fmt::Display) -> Self {
        self.options.format = Some(format.to_string());
        self
    }

    /// Layer a whole options record over what has been set so far
    #[must_use]
    pub fn options(mut self, options: &GeneratorOptions) -> Self {
        self.options = self.options.merge(options);
        self
    }

    /// Options collected so far, before defaults are applied
    #[must_use]
    pub fn current_options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate one value from the system random source
    ///
    /// # Errors
    ///
    /// Returns an error for invalid options.
    pub fn generate(self) -> Result<String> {
        self.kind.generate(&self.options)
    }

    /// Generate one value from `source`
    ///
    /// # Errors
    ///
    /// Returns an error for invalid options.
    pub fn generate_with<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<String> {
        self.kind.generate_with(source, &self.options)
    }

    /// Generate `count` values from the system random source
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn generate_many(&self, count: usize) -> Result<Vec<String>> {
        let mut source = SystemRandom::new();
        self.generate_many_with(&mut source, count)
    }

    /// Generate `count` values from `source`
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn generate_many_with<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        count: usize,
    ) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate_with(source)).collect()
    }
}
