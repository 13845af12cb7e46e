//! Bit-extraction primitives shared by the field interpreters and the
//! descriptor resolver.
//!
//! EDID packs most values either as a sub-byte field or as a "split field"
//! whose low bits live in one byte and whose high bits are borrowed from a
//! shared extension byte. Every shift/mask in the decoder goes through these
//! helpers.

/// Returns bit `index` (0 = LSB) of `byte`.
pub(crate) fn bit(byte: u8, index: u8) -> bool {
    (byte >> index) & 0x1 == 0x1
}

/// Extracts a `width`-bit field whose lowest bit sits at `offset`.
pub(crate) fn field(byte: u8, offset: u8, width: u8) -> u8 {
    debug_assert!(offset + width <= 8);
    let mask = ((1u16 << width) - 1) as u8;
    (byte >> offset) & mask
}

/// Composes a split field: `base` supplies the low `base_width` bits and
/// `extension` is stacked on top of them.
pub(crate) fn split_field(base: u8, base_width: u8, extension: u8) -> u16 {
    let base_mask = ((1u16 << base_width) - 1) as u8;
    (u16::from(extension) << base_width) | u16::from(base & base_mask)
}
