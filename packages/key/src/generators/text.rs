//! Generators that encode random bytes through a charset

use super::defaults::{
    ALPHANUMERIC_LENGTH, API_KEY_LENGTH, NUMERIC_LENGTH, PASSWORD_LENGTH, RANDOM_STRING_LENGTH,
    SECRET_KEY_LENGTH,
};
use crate::Result;
use crate::charset::{Charset, encode};
use crate::entropy::RandomSource;
use crate::options::{GeneratorOptions, StringFormat};

/// Secret key over alphanumerics plus `+/`
///
/// # Errors
///
/// Returns an error if the length exceeds the maximum.
pub fn secret_key<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = options.length.unwrap_or(SECRET_KEY_LENGTH);
    encode(source, &Charset::SECRET_KEY, length)
}

/// Alphanumeric API key, optionally written as `{prefix}_{key}`
///
/// # Errors
///
/// Returns an error if the length exceeds the maximum.
pub fn api_key<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = options.length.unwrap_or(API_KEY_LENGTH);
    let key = encode(source, &Charset::ALPHANUMERIC, length)?;

    match options.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => Ok(format!("{prefix}_{key}")),
        _ => Ok(key),
    }
}

/// Charset a password draws from
///
/// Groups are concatenated in the order lower, upper, digits, symbols. Every
/// group is on unless switched off; disabling all of them leaves lower-case.
#[must_use]
pub fn password_charset(options: &GeneratorOptions) -> Charset {
    let groups = [
        (options.include_lowercase, &Charset::LOWERCASE),
        (options.include_uppercase, &Charset::UPPERCASE),
        (options.include_numbers, &Charset::DIGITS),
        (options.include_symbols, &Charset::SYMBOLS),
    ];

    Charset::concat(
        groups
            .into_iter()
            .filter(|(enabled, _)| enabled.unwrap_or(true))
            .map(|(_, charset)| charset),
    )
    .unwrap_or(Charset::LOWERCASE)
}

/// Password over the enabled character groups
///
/// # Errors
///
/// Returns an error if the length exceeds the maximum.
pub fn password<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = options.length.unwrap_or(PASSWORD_LENGTH);
    encode(source, &password_charset(options), length)
}

/// Charset for a `random-string` format
#[must_use]
pub fn string_format_charset(format: StringFormat) -> Charset {
    match format {
        StringFormat::Alphanumeric => Charset::ALPHANUMERIC,
        StringFormat::Letters => Charset::LETTERS,
        StringFormat::Numbers => Charset::DIGITS,
        StringFormat::Hex => Charset::HEX_UPPER,
    }
}

/// Random string in one of the [`StringFormat`] alphabets
///
/// # Errors
///
/// Returns an error for an unknown format or a length above the maximum.
pub fn random_string<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = options.length.unwrap_or(RANDOM_STRING_LENGTH);
    let format: StringFormat = options.parse_format()?;
    encode(source, &string_format_charset(format), length)
}

/// Alphanumeric string
///
/// # Errors
///
/// Returns an error if the length exceeds the maximum.
pub fn alphanumeric<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = options.length.unwrap_or(ALPHANUMERIC_LENGTH);
    encode(source, &Charset::ALPHANUMERIC, length)
}

/// Digit string
///
/// # Errors
///
/// Returns an error if the length exceeds the maximum.
pub fn numeric<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let length = options.length.unwrap_or(NUMERIC_LENGTH);
    encode(source, &Charset::DIGITS, length)
}
