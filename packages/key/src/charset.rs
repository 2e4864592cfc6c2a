//! Charset-mapping encoder
//!
//! Maps random bytes onto an alphabet: each output character consumes two
//! bytes, read big-endian as a `u16` and reduced modulo the alphabet size.

use crate::entropy::RandomSource;
use crate::options::validate_length;
use crate::{KeyError, Result};
use std::borrow::Cow;

/// Non-empty ordered set of ASCII characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Cow<'static, str>,
}

impl Charset {
    /// `A-Z`
    pub const UPPERCASE: Self = Self::from_static("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    /// `a-z`
    pub const LOWERCASE: Self = Self::from_static("abcdefghijklmnopqrstuvwxyz");
    /// `0-9`
    pub const DIGITS: Self = Self::from_static("0123456789");
    /// Password symbols
    pub const SYMBOLS: Self = Self::from_static("!@#$%^&*()_+-=[]{}|;:,.<>?");
    /// Upper-case hexadecimal digits
    pub const HEX_UPPER: Self = Self::from_static("0123456789ABCDEF");
    /// `A-Za-z`
    pub const LETTERS: Self =
        Self::from_static("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");
    /// `A-Za-z0-9`
    pub const ALPHANUMERIC: Self =
        Self::from_static("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789");
    /// Alphanumeric plus `+` and `/`
    pub const SECRET_KEY: Self =
        Self::from_static("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

    const fn from_static(chars: &'static str) -> Self {
        Self {
            chars: Cow::Borrowed(chars),
        }
    }

    /// Build a charset from arbitrary ASCII characters
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyCharset`] for an empty string and
    /// [`KeyError::InvalidOption`] if any character is not ASCII.
    pub fn new(chars: impl Into<String>) -> Result<Self> {
        let chars = chars.into();
        if chars.is_empty() {
            return Err(KeyError::EmptyCharset);
        }
        if !chars.is_ascii() {
            return Err(KeyError::invalid_option("charset", chars));
        }
        Ok(Self {
            chars: Cow::Owned(chars),
        })
    }

    /// Concatenate charsets in order; `None` if `parts` is empty
    #[must_use]
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Charset>) -> Option<Self> {
        let joined: String = parts.into_iter().map(Charset::as_str).collect();
        if joined.is_empty() {
            None
        } else {
            Some(Self {
                chars: Cow::Owned(joined),
            })
        }
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether there are no characters; never true for a constructed charset
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    /// Whether `c` belongs to this charset
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }
}

/// Encode `length` characters drawn from `charset`
///
/// # Errors
///
/// Returns [`KeyError::InvalidLength`] when `length` exceeds
/// [`MAX_LENGTH`](crate::options::MAX_LENGTH).
pub fn encode<R: RandomSource + ?Sized>(
    source: &mut R,
    charset: &Charset,
    length: usize,
) -> Result<String> {
    validate_length(length)?;

    let alphabet = charset.as_str().as_bytes();
    let random = source.bytes(length * 2);

    let encoded = random
        .chunks_exact(2)
        .map(|pair| {
            let value = u16::from_be_bytes([pair[0], pair[1]]);
            char::from(alphabet[usize::from(value) % alphabet.len()])
        })
        .collect();

    Ok(encoded)
}
