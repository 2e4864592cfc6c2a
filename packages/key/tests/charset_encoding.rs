//! Tests for the charset-mapping encoder

use keyforge_key::charset::{Charset, encode};
use keyforge_key::options::MAX_LENGTH;
use keyforge_key::{KeyError, RandomSource, SeededRandom};
use proptest::prelude::*;

/// Source that replays a fixed byte pattern
struct FixedBytes(Vec<u8>);

impl RandomSource for FixedBytes {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = self.0[i % self.0.len()];
        }
    }
}

#[test]
fn test_pairs_are_read_big_endian() {
    // 0x0102 = 258, 258 % 10 = 8; 0x0001 = 1
    let mut source = FixedBytes(vec![0x01, 0x02, 0x00, 0x01]);
    let encoded = encode(&mut source, &Charset::DIGITS, 2).unwrap();
    assert_eq!(encoded, "81");
}

#[test]
fn test_zero_length_is_empty() {
    let mut source = SeededRandom::new(7);
    assert_eq!(encode(&mut source, &Charset::ALPHANUMERIC, 0).unwrap(), "");
}

#[test]
fn test_length_limit() {
    let mut source = SeededRandom::new(7);
    assert!(encode(&mut source, &Charset::DIGITS, MAX_LENGTH).is_ok());

    let err = encode(&mut source, &Charset::DIGITS, MAX_LENGTH + 1).unwrap_err();
    assert_eq!(
        err,
        KeyError::InvalidLength {
            length: MAX_LENGTH + 1,
            max: MAX_LENGTH
        }
    );
}

#[test]
fn test_custom_charset_validation() {
    assert_eq!(Charset::new("").unwrap_err(), KeyError::EmptyCharset);
    assert!(matches!(
        Charset::new("abcé"),
        Err(KeyError::InvalidOption { option: "charset", .. })
    ));

    let vowels = Charset::new("aeiou").unwrap();
    assert_eq!(vowels.len(), 5);
    assert!(!vowels.is_empty());
}

#[test]
fn test_named_charsets() {
    assert_eq!(Charset::ALPHANUMERIC.len(), 62);
    assert_eq!(Charset::SECRET_KEY.len(), 64);
    assert_eq!(Charset::LETTERS.len(), 52);
    assert_eq!(Charset::HEX_UPPER.as_str(), "0123456789ABCDEF");
    assert_eq!(Charset::SYMBOLS.as_str(), "!@#$%^&*()_+-=[]{}|;:,.<>?");
}

#[test]
fn test_concat_keeps_order() {
    let joined = Charset::concat([&Charset::DIGITS, &Charset::HEX_UPPER]).unwrap();
    assert!(joined.as_str().starts_with("0123456789"));
    assert_eq!(joined.len(), 26);
    assert!(Charset::concat(std::iter::empty()).is_none());
}

#[test]
fn test_same_seed_same_output() {
    let first = encode(&mut SeededRandom::new(42), &Charset::ALPHANUMERIC, 64).unwrap();
    let second = encode(&mut SeededRandom::new(42), &Charset::ALPHANUMERIC, 64).unwrap();
    let other = encode(&mut SeededRandom::new(43), &Charset::ALPHANUMERIC, 64).unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_digit_distribution_is_roughly_uniform() {
    let mut source = SeededRandom::new(2024);
    let encoded = encode(&mut source, &Charset::DIGITS, 4000).unwrap();

    let mut counts = [0usize; 10];
    for c in encoded.chars() {
        counts[c.to_digit(10).unwrap() as usize] += 1;
    }
    for count in counts {
        assert!((300..=500).contains(&count), "skewed count {count}");
    }
}

proptest! {
    #[test]
    fn prop_output_has_requested_length_and_alphabet(seed in any::<u64>(), length in 0usize..256) {
        let mut source = SeededRandom::new(seed);
        let encoded = encode(&mut source, &Charset::SECRET_KEY, length).unwrap();

        prop_assert_eq!(encoded.chars().count(), length);
        prop_assert!(encoded.chars().all(|c| Charset::SECRET_KEY.contains(c)));
    }
}
