//! RFC 4122 layout checks for generated UUIDs

use chrono::{TimeZone, Utc};
use keyforge_key::generators::{self, uuid_v1_at, uuid_v4};
use keyforge_key::{GeneratorOptions, SeededRandom};
use uuid::{Uuid, Variant};

#[test]
fn test_v4_version_and_variant() {
    let mut source = SeededRandom::new(100);
    for _ in 0..32 {
        let id = uuid_v4(&mut source);
        assert_eq!(id.get_version_num(), 4);
        assert_eq!(id.get_variant(), Variant::RFC4122);
    }
}

#[test]
fn test_default_format_is_lowercase_hyphenated_v4() {
    let mut source = SeededRandom::new(101);
    let text = generators::uuid(&mut source, &GeneratorOptions::default()).unwrap();

    assert_eq!(text.len(), 36);
    assert_eq!(text, text.to_lowercase());
    let groups: Vec<usize> = text.split('-').map(str::len).collect();
    assert_eq!(groups, vec![8, 4, 4, 4, 12]);
    assert_eq!(Uuid::parse_str(&text).unwrap().get_version_num(), 4);
}

#[test]
fn test_v1_encodes_timestamp() {
    let mut source = SeededRandom::new(102);
    let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
    let id = uuid_v1_at(&mut source, now);

    assert_eq!(id.get_version_num(), 1);
    assert_eq!(id.get_variant(), Variant::RFC4122);

    let b = id.as_bytes();
    let time_low = u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
    let time_mid = u64::from(u16::from_be_bytes([b[4], b[5]]));
    let time_hi = u64::from(u16::from_be_bytes([b[6], b[7]]) & 0x0FFF);
    let ticks = (time_hi << 48) | (time_mid << 32) | time_low;

    let expected = (now.timestamp() as u64) * 10_000_000 + 0x01B2_1DD2_1381_4000;
    assert_eq!(ticks, expected);
}

#[test]
fn test_v1_known_value() {
    let mut source = SeededRandom::new(7);
    let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
    let id = uuid_v1_at(&mut source, now);

    assert_eq!(
        id.hyphenated().to_string(),
        "484dc880-1449-11ef-befb-a96ae9e0c207"
    );
}

#[test]
fn test_v1_node_has_multicast_bit() {
    let mut source = SeededRandom::new(103);
    for _ in 0..16 {
        let id = uuid_v1_at(&mut source, Utc::now());
        assert_eq!(id.as_bytes()[10] & 0x01, 0x01);
    }
}

#[test]
fn test_v1_through_options() {
    let mut source = SeededRandom::new(104);
    let options = GeneratorOptions {
        format: Some("v1".into()),
        ..GeneratorOptions::default()
    };
    let text = generators::uuid(&mut source, &options).unwrap();
    assert_eq!(Uuid::parse_str(&text).unwrap().get_version_num(), 1);

    let bad = GeneratorOptions {
        format: Some("v7".into()),
        ..GeneratorOptions::default()
    };
    assert!(generators::uuid(&mut source, &bad).is_err());
}

#[test]
fn test_v1_later_time_sorts_later_in_timestamp() {
    let mut source = SeededRandom::new(105);
    let earlier = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    let hi = |id: Uuid| u16::from_be_bytes([id.as_bytes()[6], id.as_bytes()[7]]) & 0x0FFF;
    let mid = |id: Uuid| u16::from_be_bytes([id.as_bytes()[4], id.as_bytes()[5]]);

    let a = uuid_v1_at(&mut source, earlier);
    let b = uuid_v1_at(&mut source, later);
    assert!((hi(a), mid(a)) < (hi(b), mid(b)));
}
