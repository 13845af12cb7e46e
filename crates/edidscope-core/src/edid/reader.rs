use std::ops::Range;

use super::error::EdidError;
use super::layout;

/// Bounds-checked access to a raw EDID block.
pub struct EdidReader<'a> {
    block: &'a [u8],
}

impl<'a> EdidReader<'a> {
    pub fn new(block: &'a [u8]) -> Self {
        Self { block }
    }

    pub fn require_block_len(&self) -> Result<(), EdidError> {
        if self.block.len() != layout::EDID_BLOCK_LEN {
            return Err(EdidError::MalformedInput {
                expected: layout::EDID_BLOCK_LEN,
                actual: self.block.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, EdidError> {
        self.block
            .get(offset)
            .copied()
            .ok_or(EdidError::OutOfBounds {
                needed: offset + 1,
                actual: self.block.len(),
            })
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], EdidError> {
        self.block.get(range.clone()).ok_or(EdidError::OutOfBounds {
            needed: range.end,
            actual: self.block.len(),
        })
    }

    pub fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], EdidError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| EdidError::OutOfBounds {
            needed: N,
            actual: bytes.len(),
        })
    }

    pub fn read_u16_le(&self, range: Range<usize>) -> Result<u16, EdidError> {
        self.read_array::<2>(range).map(u16::from_le_bytes)
    }

    pub fn read_u32_le(&self, range: Range<usize>) -> Result<u32, EdidError> {
        self.read_array::<4>(range).map(u32::from_le_bytes)
    }

    pub fn read_descriptor_slot(&self, index: usize) -> Result<[u8; 18], EdidError> {
        let range = layout::DESCRIPTOR_RANGES
            .get(index)
            .cloned()
            .ok_or(EdidError::OutOfBounds {
                needed: layout::EDID_BLOCK_LEN,
                actual: self.block.len(),
            })?;
        self.read_array(range)
    }
}

#[cfg(test)]
mod tests {
    use super::EdidReader;
    use crate::edid::error::EdidError;

    #[test]
    fn require_block_len_rejects_short_input() {
        let block = [0u8; 127];
        let reader = EdidReader::new(&block);
        let err = reader.require_block_len().unwrap_err();
        assert_eq!(
            err,
            EdidError::MalformedInput {
                expected: 128,
                actual: 127
            }
        );
    }

    #[test]
    fn require_block_len_rejects_long_input() {
        let block = [0u8; 256];
        let reader = EdidReader::new(&block);
        assert!(matches!(
            reader.require_block_len(),
            Err(EdidError::MalformedInput { actual: 256, .. })
        ));
    }

    #[test]
    fn read_u16_le_is_little_endian() {
        let block = [0x34, 0x12];
        let reader = EdidReader::new(&block);
        assert_eq!(reader.read_u16_le(0..2).unwrap(), 0x1234);
    }

    #[test]
    fn read_u32_le_is_little_endian() {
        let block = [0x78, 0x56, 0x34, 0x12];
        let reader = EdidReader::new(&block);
        assert_eq!(reader.read_u32_le(0..4).unwrap(), 0x1234_5678);
    }

    #[test]
    fn read_past_end_is_out_of_bounds() {
        let block = [0u8; 4];
        let reader = EdidReader::new(&block);
        assert!(matches!(
            reader.read_u8(4),
            Err(EdidError::OutOfBounds { needed: 5, actual: 4 })
        ));
        assert!(reader.read_slice(2..6).is_err());
    }

    #[test]
    fn read_descriptor_slot_returns_18_bytes() {
        let mut block = [0u8; 128];
        block[54] = 0xAA;
        block[71] = 0xBB;
        let reader = EdidReader::new(&block);
        let slot = reader.read_descriptor_slot(0).unwrap();
        assert_eq!(slot[0], 0xAA);
        assert_eq!(slot[17], 0xBB);
    }
}
