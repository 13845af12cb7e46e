use std::ops::Range;

pub const EDID_BLOCK_LEN: usize = 128;
pub const HEADER_MAGIC: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

pub const HEADER_RANGE: Range<usize> = 0..8;
pub const MANUFACTURER_ID_RANGE: Range<usize> = 8..10;
pub const PRODUCT_CODE_RANGE: Range<usize> = 10..12;
pub const SERIAL_NUMBER_RANGE: Range<usize> = 12..16;
pub const MANUFACTURE_WEEK_OFFSET: usize = 16;
pub const MANUFACTURE_YEAR_OFFSET: usize = 17;
pub const VERSION_RANGE: Range<usize> = 18..20;

pub const INPUT_PARAMS_OFFSET: usize = 20;
pub const H_SIZE_CM_OFFSET: usize = 21;
pub const V_SIZE_CM_OFFSET: usize = 22;
pub const GAMMA_OFFSET: usize = 23;
pub const FEATURES_OFFSET: usize = 24;

pub const CHROMATICITY_RANGE: Range<usize> = 25..35;
pub const ESTABLISHED_TIMINGS_RANGE: Range<usize> = 35..38;
pub const STANDARD_TIMINGS_RANGE: Range<usize> = 38..54;

pub const DESCRIPTOR_RANGES: [Range<usize>; 4] = [54..72, 72..90, 90..108, 108..126];

pub const EXTENSION_COUNT_OFFSET: usize = 126;
pub const CHECKSUM_OFFSET: usize = 127;

pub const YEAR_BASE: u16 = 1990;
