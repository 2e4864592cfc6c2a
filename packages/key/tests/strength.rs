//! Tests for entropy estimates and ratings

use keyforge_key::{GeneratorKind, GeneratorOptions, Strength, estimate_bits};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_charset_generators() {
    let defaults = GeneratorOptions::default();

    // 32 * log2(64)
    assert!(approx(estimate_bits(GeneratorKind::SecretKey, &defaults).unwrap(), 192.0));
    // 10 * log2(10)
    let numeric = estimate_bits(GeneratorKind::Numeric, &defaults).unwrap();
    assert!(approx(numeric, 10.0 * 10f64.log2()));

    let hex = GeneratorOptions {
        length: Some(8),
        format: Some("hex".into()),
        ..GeneratorOptions::default()
    };
    assert!(approx(estimate_bits(GeneratorKind::RandomString, &hex).unwrap(), 32.0));
}

#[test]
fn test_password_follows_groups() {
    let digits_only = GeneratorOptions {
        include_lowercase: Some(false),
        include_uppercase: Some(false),
        include_symbols: Some(false),
        ..GeneratorOptions::default()
    };
    let all = estimate_bits(GeneratorKind::Password, &GeneratorOptions::default()).unwrap();
    let digits = estimate_bits(GeneratorKind::Password, &digits_only).unwrap();
    assert!(all > digits);
    assert!(approx(digits, 16.0 * 10f64.log2()));
}

#[test]
fn test_byte_generators() {
    let defaults = GeneratorOptions::default();
    assert!(approx(estimate_bits(GeneratorKind::JwtSecret, &defaults).unwrap(), 512.0));
    assert!(approx(estimate_bits(GeneratorKind::HexColor, &defaults).unwrap(), 24.0));
    assert!(approx(estimate_bits(GeneratorKind::MacAddress, &defaults).unwrap(), 48.0));
    assert!(approx(estimate_bits(GeneratorKind::Base64, &defaults).unwrap(), 192.0));
    assert!(approx(estimate_bits(GeneratorKind::Uuid, &defaults).unwrap(), 122.0));
}

#[test]
fn test_unknown_format_is_an_error() {
    let bad = GeneratorOptions {
        format: Some("base32".into()),
        ..GeneratorOptions::default()
    };
    assert!(estimate_bits(GeneratorKind::RandomString, &bad).is_err());
}

#[test]
fn test_ratings() {
    assert_eq!(Strength::from_bits(24.0), Strength::Weak);
    assert_eq!(Strength::from_bits(64.0), Strength::Fair);
    assert_eq!(Strength::from_bits(95.3), Strength::Strong);
    assert_eq!(Strength::from_bits(128.0), Strength::VeryStrong);
    assert!(Strength::Weak < Strength::VeryStrong);
    assert_eq!(Strength::VeryStrong.to_string(), "very strong");
}
