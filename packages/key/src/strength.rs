//! Theoretical strength of generated values
//!
//! Estimates are computed from the options alone, assuming a uniform
//! source: `length * log2(|charset|)` for charset encoders and eight bits
//! per random byte for byte encoders.

use crate::Result;
use crate::api::GeneratorKind;
use crate::charset::Charset;
use crate::generators::defaults;
use crate::generators::text::{password_charset, string_format_charset};
use crate::options::{GeneratorOptions, StringFormat, UuidVersion};
use std::fmt;

/// Random bits in a v4 UUID (128 minus version and variant)
const UUID_V4_BITS: f64 = 122.0;
/// Random bits in our v1 UUID (clock sequence and node)
const UUID_V1_BITS: f64 = 61.0;

/// Coarse rating of an entropy estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    /// Under 64 bits
    Weak,
    /// 64 to 79 bits
    Fair,
    /// 80 to 127 bits
    Strong,
    /// 128 bits or more
    VeryStrong,
}

impl Strength {
    /// Rate an entropy estimate in bits
    #[must_use]
    pub fn from_bits(bits: f64) -> Self {
        match bits {
            b if b >= 128.0 => Self::VeryStrong,
            b if b >= 80.0 => Self::Strong,
            b if b >= 64.0 => Self::Fair,
            _ => Self::Weak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn charset_bits(charset: &Charset, length: usize) -> f64 {
    length as f64 * (charset.len() as f64).log2()
}

#[allow(clippy::cast_precision_loss)]
fn byte_bits(bytes: usize) -> f64 {
    bytes as f64 * 8.0
}

#[allow(clippy::cast_precision_loss)]
fn base64_bits(chars: usize) -> f64 {
    chars as f64 * 6.0
}

/// Estimated entropy, in bits, of one value from `kind` with `options`
///
/// # Errors
///
/// Returns an error if `options` carries an unknown format.
pub fn estimate_bits(kind: GeneratorKind, options: &GeneratorOptions) -> Result<f64> {
    let options = kind.default_options().merge(options);
    let length = |fallback| options.length.unwrap_or(fallback);

    let bits = match kind {
        GeneratorKind::SecretKey => {
            charset_bits(&Charset::SECRET_KEY, length(defaults::SECRET_KEY_LENGTH))
        }
        GeneratorKind::ApiKey => {
            charset_bits(&Charset::ALPHANUMERIC, length(defaults::API_KEY_LENGTH))
        }
        GeneratorKind::Password => {
            charset_bits(&password_charset(&options), length(defaults::PASSWORD_LENGTH))
        }
        GeneratorKind::JwtSecret => byte_bits(length(defaults::JWT_SECRET_BYTES)),
        GeneratorKind::Uuid => match options.parse_format::<UuidVersion>()? {
            UuidVersion::V4 => UUID_V4_BITS,
            UuidVersion::V1 => UUID_V1_BITS,
        },
        GeneratorKind::RandomString => {
            let format: StringFormat = options.parse_format()?;
            charset_bits(
                &string_format_charset(format),
                length(defaults::RANDOM_STRING_LENGTH),
            )
        }
        GeneratorKind::HexColor => byte_bits(3),
        GeneratorKind::Base64 => base64_bits(length(defaults::BASE64_LENGTH)),
        GeneratorKind::Alphanumeric => {
            charset_bits(&Charset::ALPHANUMERIC, length(defaults::ALPHANUMERIC_LENGTH))
        }
        GeneratorKind::Numeric => charset_bits(&Charset::DIGITS, length(defaults::NUMERIC_LENGTH)),
        GeneratorKind::MacAddress => byte_bits(6),
    };

    Ok(bits)
}
