//! Generators that encode raw random bytes (base64, hex)

use super::defaults::{BASE64_LENGTH, JWT_SECRET_BYTES};
use crate::Result;
use crate::entropy::RandomSource;
use crate::options::{GeneratorOptions, validate_length};
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

/// URL-safe, unpadded base64 of `length` random bytes
///
/// # Errors
///
/// Returns an error if the byte count exceeds the maximum.
pub fn jwt_secret<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let byte_count = validate_length(options.length.unwrap_or(JWT_SECRET_BYTES))?;
    let bytes = source.bytes(byte_count);
    Ok(URL_SAFE_NO_PAD.encode(bytes.as_slice()))
}

/// Standard-alphabet base64 text of exactly `length` characters
///
/// Draws `ceil(length * 3 / 4)` bytes, encodes them and truncates, so the
/// output never contains padding.
///
/// # Errors
///
/// Returns an error if the length exceeds the maximum.
pub fn base64_string<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = validate_length(options.length.unwrap_or(BASE64_LENGTH))?;
    let bytes = source.bytes((length * 3).div_ceil(4));

    let mut encoded = STANDARD.encode(bytes.as_slice());
    encoded.truncate(length);
    Ok(encoded)
}

/// `#rrggbb` colour from three random bytes
pub fn hex_color<R: RandomSource + ?Sized>(source: &mut R) -> String {
    let bytes = source.bytes(3);
    format!("#{}", hex::encode(bytes.as_slice()))
}
