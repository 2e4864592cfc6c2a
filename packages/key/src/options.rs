//! Generator options record and the typed formats parsed from it

use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest length any generator accepts
pub const MAX_LENGTH: usize = 4096;

/// Reject lengths above [`MAX_LENGTH`]
///
/// # Errors
///
/// Returns [`KeyError::InvalidLength`] when `length > MAX_LENGTH`.
pub fn validate_length(length: usize) -> Result<usize> {
    if length > MAX_LENGTH {
        return Err(KeyError::InvalidLength {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(length)
}

/// Options shared by all generators; each generator reads the fields it needs
///
/// Every field is optional so that a partial record can be layered over a
/// generator's defaults with [`GeneratorOptions::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Output length (characters, or bytes for `jwt-secret`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Include `!@#$...` symbols in passwords
    #[serde(alias = "include_symbols", skip_serializing_if = "Option::is_none")]
    pub include_symbols: Option<bool>,
    /// Include digits in passwords
    #[serde(alias = "include_numbers", skip_serializing_if = "Option::is_none")]
    pub include_numbers: Option<bool>,
    /// Include upper-case letters in passwords
    #[serde(alias = "include_uppercase", skip_serializing_if = "Option::is_none")]
    pub include_uppercase: Option<bool>,
    /// Include lower-case letters in passwords
    #[serde(alias = "include_lowercase", skip_serializing_if = "Option::is_none")]
    pub include_lowercase: Option<bool>,
    /// API key prefix, joined with `_`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Generator-specific format name (`v4`, `hex`, `colon`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl GeneratorOptions {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win
    #[must_use]
    pub fn merge(&self, overrides: &Self) -> Self {
        Self {
            length: overrides.length.or(self.length),
            include_symbols: overrides.include_symbols.or(self.include_symbols),
            include_numbers: overrides.include_numbers.or(self.include_numbers),
            include_uppercase: overrides.include_uppercase.or(self.include_uppercase),
            include_lowercase: overrides.include_lowercase.or(self.include_lowercase),
            prefix: overrides.prefix.clone().or_else(|| self.prefix.clone()),
            format: overrides.format.clone().or_else(|| self.format.clone()),
        }
    }

    /// Whether no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse the `format` field, falling back to `T::default()` when unset
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidOption`] for an unrecognised format name.
    pub fn parse_format<T>(&self) -> Result<T>
    where
        T: FromStr<Err = KeyError> + Default,
    {
        self.format.as_deref().map_or_else(|| Ok(T::default()), str::parse)
    }
}

macro_rules! format_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All accepted values in display order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical option string
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = KeyError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(KeyError::invalid_option("format", s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

format_enum! {
    /// UUID variant to generate
    UuidVersion {
        /// Time-based
        V1 => "v1",
        /// Random
        V4 => "v4",
    }
}

format_enum! {
    /// Alphabet for the `random-string` generator
    StringFormat {
        /// `A-Za-z0-9`
        Alphanumeric => "alphanumeric",
        /// `A-Za-z`
        Letters => "letters",
        /// `0-9`
        Numbers => "numbers",
        /// `0-9A-F`
        Hex => "hex",
    }
}

format_enum! {
    /// Separator style for MAC addresses
    MacFormat {
        /// `AA:BB:CC:DD:EE:FF`
        Colon => "colon",
        /// `AA-BB-CC-DD-EE-FF`
        Hyphen => "hyphen",
        /// `AABB.CCDD.EEFF`
        Dot => "dot",
    }
}

impl Default for UuidVersion {
    fn default() -> Self {
        Self::V4
    }
}

impl Default for StringFormat {
    fn default() -> Self {
        Self::Alphanumeric
    }
}

impl Default for MacFormat {
    fn default() -> Self {
        Self::Colon
    }
}
