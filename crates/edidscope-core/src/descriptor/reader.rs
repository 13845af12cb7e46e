use std::ops::Range;

use crate::common::bits;

use super::layout::{self, SplitField};

/// Byte access over one 18-byte descriptor slot.
///
/// The slot length is fixed by type, so every accessor is infallible as long
/// as offsets come from `layout`.
pub struct SlotReader<'a> {
    slot: &'a [u8; layout::DESCRIPTOR_LEN],
}

impl<'a> SlotReader<'a> {
    pub fn new(slot: &'a [u8; layout::DESCRIPTOR_LEN]) -> Self {
        Self { slot }
    }

    pub fn raw(&self) -> [u8; layout::DESCRIPTOR_LEN] {
        *self.slot
    }

    pub fn read_u8(&self, offset: usize) -> u8 {
        self.slot[offset]
    }

    pub fn read_u16_le(&self, range: Range<usize>) -> u16 {
        let bytes = &self.slot[range];
        u16::from_le_bytes([bytes[0], bytes[1]])
    }

    /// First byte is the high-order byte.
    pub fn read_u16_be(&self, range: Range<usize>) -> u16 {
        let bytes = &self.slot[range];
        u16::from_be_bytes([bytes[0], bytes[1]])
    }

    pub fn read_bit(&self, offset: usize, index: u8) -> bool {
        bits::bit(self.slot[offset], index)
    }

    pub fn read_field(&self, offset: usize, shift: u8, width: u8) -> u8 {
        bits::field(self.slot[offset], shift, width)
    }

    pub fn read_split(&self, split: SplitField) -> u16 {
        let base = self.read_field(split.base, split.base_shift, split.base_width);
        let extension = self.read_field(split.ext, split.ext_shift, split.ext_width);
        bits::split_field(base, split.base_width, extension)
    }

    pub fn is_display_descriptor(&self) -> bool {
        self.read_u16_le(layout::PIXEL_CLOCK_RANGE) == 0
    }

    /// Text payload with every byte mapped to the Latin-1 code point of the
    /// same value. Stops at the first line feed; trailing padding is trimmed.
    pub fn read_text(&self) -> String {
        let bytes = &self.slot[layout::TEXT_RANGE];
        let end = bytes
            .iter()
            .position(|&b| b == layout::TEXT_TERMINATOR)
            .unwrap_or(bytes.len());
        let text: String = bytes[..end].iter().copied().map(char::from).collect();
        text.trim_end().to_string()
    }
}
