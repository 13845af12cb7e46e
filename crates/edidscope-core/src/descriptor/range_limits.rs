//! Display range limits descriptor (tag 0xFD) and its timing formula block.

use serde::{Deserialize, Serialize};

use super::layout;
use super::reader::SlotReader;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub v_min_hz: u16,
    pub v_max_hz: u16,
    pub h_min_khz: u16,
    pub h_max_khz: u16,
    pub max_pixel_clock_mhz: u16,
    pub timing: RangeTiming,
}

/// Timing formula support advertised in bytes 10-17.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeTiming {
    DefaultGtf,
    NoTimingInfo,
    SecondaryGtf(SecondaryGtf),
    Cvt(CvtSupport),
    Reserved { code: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryGtf {
    pub start_frequency_khz: u16,
    pub c: f64,
    pub m: u16,
    pub k: u8,
    pub j: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvtSupport {
    pub version_major: u8,
    pub version_minor: u8,
    pub pixel_clock_adjust_mhz: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_active_pixels: Option<u16>,
    pub supported_aspect_ratios: Vec<CvtAspectRatio>,
    pub preferred_aspect_ratio: CvtAspectRatio,
    pub reduced_blanking: bool,
    pub standard_blanking: bool,
    pub scaling: Vec<ScalingSupport>,
    pub preferred_refresh_hz: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvtAspectRatio {
    Ratio4_3,
    Ratio16_9,
    Ratio16_10,
    Ratio5_4,
    Ratio5_3,
    Reserved(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingSupport {
    HorizontalShrink,
    HorizontalStretch,
    VerticalShrink,
    VerticalStretch,
}

impl CvtAspectRatio {
    pub fn label(&self) -> String {
        match self {
            CvtAspectRatio::Ratio4_3 => "4:3".to_string(),
            CvtAspectRatio::Ratio16_9 => "16:9".to_string(),
            CvtAspectRatio::Ratio16_10 => "16:10".to_string(),
            CvtAspectRatio::Ratio5_4 => "5:4".to_string(),
            CvtAspectRatio::Ratio5_3 => "5:3".to_string(),
            CvtAspectRatio::Reserved(code) => format!("Reserved ({code})"),
        }
    }
}

impl ScalingSupport {
    pub fn label(&self) -> &'static str {
        match self {
            ScalingSupport::HorizontalShrink => "horizontal shrink",
            ScalingSupport::HorizontalStretch => "horizontal stretch",
            ScalingSupport::VerticalShrink => "vertical shrink",
            ScalingSupport::VerticalStretch => "vertical stretch",
        }
    }
}

// Bit 7 downwards in byte 14.
const CVT_ASPECT_BITS: [CvtAspectRatio; 5] = [
    CvtAspectRatio::Ratio4_3,
    CvtAspectRatio::Ratio16_9,
    CvtAspectRatio::Ratio16_10,
    CvtAspectRatio::Ratio5_4,
    CvtAspectRatio::Ratio5_3,
];

// Bit 7 downwards in byte 16.
const SCALING_BITS: [ScalingSupport; 4] = [
    ScalingSupport::HorizontalShrink,
    ScalingSupport::HorizontalStretch,
    ScalingSupport::VerticalShrink,
    ScalingSupport::VerticalStretch,
];

pub fn decode_range_limits(reader: &SlotReader<'_>) -> RangeLimits {
    let flags = layout::RANGE_OFFSET_FLAGS_OFFSET;
    let v_min_offset = reader.read_bit(flags, 0);
    let v_max_offset = v_min_offset || reader.read_bit(flags, 1);
    let h_min_offset = reader.read_bit(flags, 2);
    let h_max_offset = h_min_offset || reader.read_bit(flags, 3);

    let with_offset = |offset: usize, extended: bool| {
        let base = u16::from(reader.read_u8(offset));
        if extended {
            base + layout::RANGE_EXTENDED_OFFSET
        } else {
            base
        }
    };

    RangeLimits {
        v_min_hz: with_offset(layout::RANGE_V_MIN_OFFSET, v_min_offset),
        v_max_hz: with_offset(layout::RANGE_V_MAX_OFFSET, v_max_offset),
        h_min_khz: with_offset(layout::RANGE_H_MIN_OFFSET, h_min_offset),
        h_max_khz: with_offset(layout::RANGE_H_MAX_OFFSET, h_max_offset),
        max_pixel_clock_mhz: u16::from(reader.read_u8(layout::RANGE_MAX_PIXEL_CLOCK_OFFSET))
            * layout::RANGE_PIXEL_CLOCK_STEP_MHZ,
        timing: decode_range_timing(reader),
    }
}

fn decode_range_timing(reader: &SlotReader<'_>) -> RangeTiming {
    match reader.read_u8(layout::RANGE_TIMING_TYPE_OFFSET) {
        layout::TIMING_DEFAULT_GTF => RangeTiming::DefaultGtf,
        layout::TIMING_NO_INFO => RangeTiming::NoTimingInfo,
        layout::TIMING_SECONDARY_GTF => RangeTiming::SecondaryGtf(decode_secondary_gtf(reader)),
        layout::TIMING_CVT => RangeTiming::Cvt(decode_cvt(reader)),
        code => RangeTiming::Reserved { code },
    }
}

fn decode_secondary_gtf(reader: &SlotReader<'_>) -> SecondaryGtf {
    SecondaryGtf {
        start_frequency_khz: u16::from(reader.read_u8(layout::GTF_START_FREQUENCY_OFFSET)) * 2,
        c: f64::from(reader.read_u8(layout::GTF_C_OFFSET)) / 2.0,
        m: reader.read_u16_le(layout::GTF_M_RANGE),
        k: reader.read_u8(layout::GTF_K_OFFSET),
        j: f64::from(reader.read_u8(layout::GTF_J_OFFSET)) / 2.0,
    }
}

fn decode_cvt(reader: &SlotReader<'_>) -> CvtSupport {
    let precision = layout::CVT_CLOCK_PRECISION_OFFSET;
    let max_active = (u16::from(reader.read_field(precision, 0, 2)) << 8)
        | u16::from(reader.read_u8(layout::CVT_MAX_ACTIVE_LOW_OFFSET));

    let supported_aspect_ratios = CVT_ASPECT_BITS
        .iter()
        .enumerate()
        .filter(|(index, _)| reader.read_bit(layout::CVT_ASPECT_SUPPORT_OFFSET, 7 - *index as u8))
        .map(|(_, ratio)| *ratio)
        .collect();

    let preferred_aspect_ratio =
        match reader.read_field(layout::CVT_ASPECT_PREFERENCE_OFFSET, 5, 3) {
            0 => CvtAspectRatio::Ratio4_3,
            1 => CvtAspectRatio::Ratio16_9,
            2 => CvtAspectRatio::Ratio16_10,
            3 => CvtAspectRatio::Ratio5_4,
            4 => CvtAspectRatio::Ratio5_3,
            code => CvtAspectRatio::Reserved(code),
        };

    let scaling = SCALING_BITS
        .iter()
        .enumerate()
        .filter(|(index, _)| reader.read_bit(layout::CVT_SCALING_OFFSET, 7 - *index as u8))
        .map(|(_, scaling)| *scaling)
        .collect();

    CvtSupport {
        version_major: reader.read_field(layout::CVT_VERSION_OFFSET, 4, 4),
        version_minor: reader.read_field(layout::CVT_VERSION_OFFSET, 0, 4),
        pixel_clock_adjust_mhz: f64::from(reader.read_field(precision, 2, 6))
            * layout::CVT_CLOCK_PRECISION_STEP_MHZ,
        max_active_pixels: (max_active != 0)
            .then(|| max_active * layout::CVT_ACTIVE_PIXELS_GRANULARITY),
        supported_aspect_ratios,
        preferred_aspect_ratio,
        reduced_blanking: reader.read_bit(layout::CVT_ASPECT_PREFERENCE_OFFSET, 4),
        standard_blanking: reader.read_bit(layout::CVT_ASPECT_PREFERENCE_OFFSET, 3),
        scaling,
        preferred_refresh_hz: reader.read_u8(layout::CVT_PREFERRED_REFRESH_OFFSET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_slot(timing_type: u8, tail: &[u8]) -> [u8; 18] {
        let mut slot = [0u8; 18];
        slot[3] = layout::TAG_RANGE_LIMITS;
        slot[5] = 56;
        slot[6] = 76;
        slot[7] = 30;
        slot[8] = 83;
        slot[9] = 17;
        slot[10] = timing_type;
        slot[11..11 + tail.len()].copy_from_slice(tail);
        slot
    }

    #[test]
    fn default_gtf_limits() {
        let slot = range_slot(0x00, &[0x0A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20]);
        let limits = decode_range_limits(&SlotReader::new(&slot));
        assert_eq!(limits.v_min_hz, 56);
        assert_eq!(limits.v_max_hz, 76);
        assert_eq!(limits.h_min_khz, 30);
        assert_eq!(limits.h_max_khz, 83);
        assert_eq!(limits.max_pixel_clock_mhz, 170);
        assert_eq!(limits.timing, RangeTiming::DefaultGtf);
    }

    #[test]
    fn no_timing_info() {
        let slot = range_slot(0x01, &[]);
        let limits = decode_range_limits(&SlotReader::new(&slot));
        assert_eq!(limits.timing, RangeTiming::NoTimingInfo);
    }

    #[test]
    fn offset_flags_extend_by_255() {
        let mut slot = range_slot(0x01, &[]);
        slot[4] = 0b0000_1010;
        let limits = decode_range_limits(&SlotReader::new(&slot));
        assert_eq!(limits.v_min_hz, 56);
        assert_eq!(limits.v_max_hz, 76 + 255);
        assert_eq!(limits.h_min_khz, 30);
        assert_eq!(limits.h_max_khz, 83 + 255);

        slot[4] = 0b0000_0101;
        let limits = decode_range_limits(&SlotReader::new(&slot));
        assert_eq!(limits.v_min_hz, 56 + 255);
        assert_eq!(limits.v_max_hz, 76 + 255);
        assert_eq!(limits.h_min_khz, 30 + 255);
        assert_eq!(limits.h_max_khz, 83 + 255);
    }

    #[test]
    fn secondary_gtf_coefficients() {
        let slot = range_slot(0x02, &[0x00, 0x32, 0x50, 0x58, 0x02, 0x80, 0x28]);
        let limits = decode_range_limits(&SlotReader::new(&slot));
        assert_eq!(
            limits.timing,
            RangeTiming::SecondaryGtf(SecondaryGtf {
                start_frequency_khz: 100,
                c: 40.0,
                m: 600,
                k: 128,
                j: 20.0,
            })
        );
    }

    #[test]
    fn cvt_populates_only_cvt_fields() {
        // CVT 1.1, 0.5 MHz adjust, 2560 max active, 4:3 16:9 16:10, prefer 16:9,
        // reduced + standard blanking, h/v shrink and stretch, 60 Hz preferred
        let slot = range_slot(0x04, &[0x11, 0x09, 0x40, 0xE0, 0x38, 0xF0, 0x3C]);
        let limits = decode_range_limits(&SlotReader::new(&slot));
        let cvt = match limits.timing {
            RangeTiming::Cvt(cvt) => cvt,
            other => panic!("expected CVT timing, got {other:?}"),
        };
        assert_eq!(cvt.version_major, 1);
        assert_eq!(cvt.version_minor, 1);
        assert_eq!(cvt.pixel_clock_adjust_mhz, 0.5);
        assert_eq!(cvt.max_active_pixels, Some(2560));
        assert_eq!(
            cvt.supported_aspect_ratios,
            vec![
                CvtAspectRatio::Ratio4_3,
                CvtAspectRatio::Ratio16_9,
                CvtAspectRatio::Ratio16_10
            ]
        );
        assert_eq!(cvt.preferred_aspect_ratio, CvtAspectRatio::Ratio16_9);
        assert!(cvt.reduced_blanking);
        assert!(cvt.standard_blanking);
        assert_eq!(
            cvt.scaling,
            vec![
                ScalingSupport::HorizontalShrink,
                ScalingSupport::HorizontalStretch,
                ScalingSupport::VerticalShrink,
                ScalingSupport::VerticalStretch
            ]
        );
        assert_eq!(cvt.preferred_refresh_hz, 60);
    }

    #[test]
    fn cvt_without_max_active_limit() {
        let slot = range_slot(0x04, &[0x11, 0x00, 0x00, 0x08, 0xA0, 0x00, 0x4B]);
        let limits = decode_range_limits(&SlotReader::new(&slot));
        let RangeTiming::Cvt(cvt) = limits.timing else {
            panic!("expected CVT timing");
        };
        assert_eq!(cvt.max_active_pixels, None);
        assert_eq!(cvt.supported_aspect_ratios, vec![CvtAspectRatio::Ratio5_3]);
        assert_eq!(cvt.preferred_aspect_ratio, CvtAspectRatio::Reserved(5));
        assert!(cvt.scaling.is_empty());
        assert_eq!(cvt.preferred_refresh_hz, 75);
    }

    #[test]
    fn unknown_timing_type_is_reserved() {
        let slot = range_slot(0x03, &[]);
        let limits = decode_range_limits(&SlotReader::new(&slot));
        assert_eq!(limits.timing, RangeTiming::Reserved { code: 3 });
    }
}
