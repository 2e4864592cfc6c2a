//! UUID and MAC address generators

use crate::Result;
use crate::entropy::RandomSource;
use crate::options::{GeneratorOptions, MacFormat, UuidVersion};
use chrono::{DateTime, Utc};
use uuid::{Builder, Uuid};

/// 100 ns intervals between 1582-10-15 and 1970-01-01
const GREGORIAN_OFFSET: i128 = 0x01B2_1DD2_1381_4000;

/// Lower-case hyphenated UUID of the requested version
///
/// # Errors
///
/// Returns an error for a format other than `v1` or `v4`.
pub fn uuid<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let uuid = match options.parse_format::<UuidVersion>()? {
        UuidVersion::V4 => uuid_v4(source),
        UuidVersion::V1 => uuid_v1_at(source, Utc::now()),
    };
    Ok(uuid.hyphenated().to_string())
}

/// Random (version 4) UUID
pub fn uuid_v4<R: RandomSource + ?Sized>(source: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    source.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// Time-based (version 1) UUID for the instant `now`
///
/// Clock sequence and node id are random; the node has its multicast bit
/// set so it cannot collide with a real IEEE 802 address.
pub fn uuid_v1_at<R: RandomSource + ?Sized>(source: &mut R, now: DateTime<Utc>) -> Uuid {
    let unix_ticks = i128::from(now.timestamp()) * 10_000_000
        + i128::from(now.timestamp_subsec_nanos() / 100);
    let ticks = u64::try_from(unix_ticks + GREGORIAN_OFFSET).unwrap_or(0);

    let mut random = [0u8; 8];
    source.fill_bytes(&mut random);

    let clock_seq = u16::from_be_bytes([random[0], random[1]]) & 0x3FFF;
    let mut node = [0u8; 6];
    node.copy_from_slice(&random[2..8]);
    node[0] |= 0x01;

    Builder::from_gregorian_timestamp(ticks, clock_seq, &node).into_uuid()
}

/// Upper-case MAC address in the requested separator style
///
/// # Errors
///
/// Returns an error for an unknown format.
pub fn mac_address<R: RandomSource + ?Sized>(
    source: &mut R,
    options: &GeneratorOptions,
) -> Result<String> {
    let format: MacFormat = options.parse_format()?;
    let bytes = source.bytes(6);
    let digits = hex::encode_upper(bytes.as_slice());

    let (group, separator) = match format {
        MacFormat::Colon => (2, ":"),
        MacFormat::Hyphen => (2, "-"),
        MacFormat::Dot => (4, "."),
    };

    let groups: Vec<&str> = (0..digits.len())
        .step_by(group)
        .map(|i| &digits[i..i + group])
        .collect();
    Ok(groups.join(separator))
}
