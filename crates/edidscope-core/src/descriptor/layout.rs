use std::ops::Range;

pub const DESCRIPTOR_LEN: usize = 18;

pub const PIXEL_CLOCK_RANGE: Range<usize> = 0..2;
pub const PIXEL_CLOCK_UNITS_PER_MHZ: f64 = 100.0;

/// A value whose low bits live in `base` and whose high bits are borrowed
/// from a shared extension byte.
#[derive(Debug, Clone, Copy)]
pub struct SplitField {
    pub base: usize,
    pub base_shift: u8,
    pub base_width: u8,
    pub ext: usize,
    pub ext_shift: u8,
    pub ext_width: u8,
}

impl SplitField {
    const fn byte(base: usize, ext: usize, ext_shift: u8, ext_width: u8) -> Self {
        Self {
            base,
            base_shift: 0,
            base_width: 8,
            ext,
            ext_shift,
            ext_width,
        }
    }

    const fn nibble(base: usize, base_shift: u8, ext: usize, ext_shift: u8, ext_width: u8) -> Self {
        Self {
            base,
            base_shift,
            base_width: 4,
            ext,
            ext_shift,
            ext_width,
        }
    }
}

pub const H_ACTIVE: SplitField = SplitField::byte(2, 4, 4, 4);
pub const H_BLANK: SplitField = SplitField::byte(3, 4, 0, 4);
pub const V_ACTIVE: SplitField = SplitField::byte(5, 7, 4, 4);
pub const V_BLANK: SplitField = SplitField::byte(6, 7, 0, 4);
pub const H_FRONT_PORCH: SplitField = SplitField::byte(8, 11, 6, 2);
pub const H_SYNC_PULSE: SplitField = SplitField::byte(9, 11, 4, 2);
pub const V_FRONT_PORCH: SplitField = SplitField::nibble(10, 4, 11, 2, 2);
pub const V_SYNC_PULSE: SplitField = SplitField::nibble(10, 0, 11, 0, 2);
pub const H_SIZE_MM: SplitField = SplitField::byte(12, 14, 4, 4);
pub const V_SIZE_MM: SplitField = SplitField::byte(13, 14, 0, 4);
pub const H_BORDER_OFFSET: usize = 15;
pub const V_BORDER_OFFSET: usize = 16;
pub const DTD_FEATURES_OFFSET: usize = 17;

pub const TAG_OFFSET: usize = 3;
pub const TEXT_RANGE: Range<usize> = 5..18;
pub const TEXT_TERMINATOR: u8 = 0x0A;

pub const TAG_SERIAL_NUMBER: u8 = 0xFF;
pub const TAG_UNSPECIFIED_TEXT: u8 = 0xFE;
pub const TAG_RANGE_LIMITS: u8 = 0xFD;
pub const TAG_DISPLAY_NAME: u8 = 0xFC;

pub const RANGE_OFFSET_FLAGS_OFFSET: usize = 4;
pub const RANGE_V_MIN_OFFSET: usize = 5;
pub const RANGE_V_MAX_OFFSET: usize = 6;
pub const RANGE_H_MIN_OFFSET: usize = 7;
pub const RANGE_H_MAX_OFFSET: usize = 8;
pub const RANGE_MAX_PIXEL_CLOCK_OFFSET: usize = 9;
pub const RANGE_TIMING_TYPE_OFFSET: usize = 10;
pub const RANGE_EXTENDED_OFFSET: u16 = 255;
pub const RANGE_PIXEL_CLOCK_STEP_MHZ: u16 = 10;

pub const TIMING_DEFAULT_GTF: u8 = 0x00;
pub const TIMING_NO_INFO: u8 = 0x01;
pub const TIMING_SECONDARY_GTF: u8 = 0x02;
pub const TIMING_CVT: u8 = 0x04;

pub const GTF_START_FREQUENCY_OFFSET: usize = 12;
pub const GTF_C_OFFSET: usize = 13;
pub const GTF_M_RANGE: Range<usize> = 14..16;
pub const GTF_K_OFFSET: usize = 16;
pub const GTF_J_OFFSET: usize = 17;

pub const CVT_VERSION_OFFSET: usize = 11;
pub const CVT_CLOCK_PRECISION_OFFSET: usize = 12;
pub const CVT_MAX_ACTIVE_LOW_OFFSET: usize = 13;
pub const CVT_ASPECT_SUPPORT_OFFSET: usize = 14;
pub const CVT_ASPECT_PREFERENCE_OFFSET: usize = 15;
pub const CVT_SCALING_OFFSET: usize = 16;
pub const CVT_PREFERRED_REFRESH_OFFSET: usize = 17;
pub const CVT_CLOCK_PRECISION_STEP_MHZ: f64 = 0.25;
pub const CVT_ACTIVE_PIXELS_GRANULARITY: u16 = 8;
