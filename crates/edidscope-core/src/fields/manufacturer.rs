//! PNP manufacturer id: three 5-bit letters packed big-endian into two bytes.

use crate::common::bits;

const LETTER_BASE: u8 = 0x40;

/// Decode the packed manufacturer id into its three-letter code.
///
/// Groups outside `A..=Z` (e.g. zero) still map to the ASCII character at
/// `0x40 + group`, so malformed ids stay visible instead of being dropped.
pub fn decode_manufacturer_id(bytes: [u8; 2]) -> String {
    let packed = u16::from_be_bytes(bytes);
    [10u8, 5, 0]
        .iter()
        .map(|shift| {
            let group = ((packed >> shift) & 0x1F) as u8;
            char::from(group + LETTER_BASE)
        })
        .collect()
}

/// Pack a three-letter code into its two-byte EDID form.
///
/// Returns `None` unless `code` is exactly three ASCII letters `A..=Z`.
pub fn encode_manufacturer_id(code: &str) -> Option<[u8; 2]> {
    let letters = code.as_bytes();
    if letters.len() != 3 || !letters.iter().all(u8::is_ascii_uppercase) {
        return None;
    }
    let packed = letters.iter().fold(0u16, |acc, letter| {
        (acc << 5) | u16::from(bits::field(letter - LETTER_BASE, 0, 5))
    });
    Some(packed.to_be_bytes())
}
