//! Detailed timing descriptor decoding.

use serde::{Deserialize, Serialize};

use crate::common::bits;

use super::layout;
use super::reader::SlotReader;

/// One fully specified video timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedTiming {
    pub pixel_clock_mhz: f64,
    pub h_active: u16,
    pub h_blank: u16,
    pub v_active: u16,
    pub v_blank: u16,
    pub h_front_porch: u16,
    pub h_sync_pulse: u16,
    pub v_front_porch: u16,
    pub v_sync_pulse: u16,
    pub h_size_mm: u16,
    pub v_size_mm: u16,
    pub h_border: u8,
    pub v_border: u8,
    pub features: DtdFeatures,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtdFeatures {
    pub raw: u8,
    pub interlaced: bool,
    pub stereo: StereoMode,
    pub sync: SyncType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StereoMode {
    None,
    FieldSequentialRight,
    FieldSequentialLeft,
    InterleavedRightEven,
    InterleavedLeftEven,
    FourWayInterleaved,
    SideBySide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncType {
    AnalogComposite {
        bipolar: bool,
        serrated: bool,
        sync_on_all_lines: bool,
    },
    DigitalComposite {
        serrated: bool,
        hsync_positive: bool,
    },
    DigitalSeparate {
        vsync_positive: bool,
        hsync_positive: bool,
    },
}

impl DetailedTiming {
    pub fn h_total(&self) -> u32 {
        u32::from(self.h_active) + u32::from(self.h_blank)
    }

    pub fn v_total(&self) -> u32 {
        u32::from(self.v_active) + u32::from(self.v_blank)
    }

    /// Frame refresh rate derived from the pixel clock and total raster.
    pub fn refresh_hz(&self) -> Option<f64> {
        let total = f64::from(self.h_total()) * f64::from(self.v_total());
        if total == 0.0 {
            return None;
        }
        Some(self.pixel_clock_mhz * 1_000_000.0 / total)
    }
}

impl StereoMode {
    pub fn label(&self) -> &'static str {
        match self {
            StereoMode::None => "none",
            StereoMode::FieldSequentialRight => "field sequential, right during stereo sync",
            StereoMode::FieldSequentialLeft => "field sequential, left during stereo sync",
            StereoMode::InterleavedRightEven => "2-way interleaved, right image on even lines",
            StereoMode::InterleavedLeftEven => "2-way interleaved, left image on even lines",
            StereoMode::FourWayInterleaved => "4-way interleaved",
            StereoMode::SideBySide => "side-by-side interleaved",
        }
    }
}

pub fn decode_detailed_timing(reader: &SlotReader<'_>) -> DetailedTiming {
    let pixel_clock = reader.read_u16_be(layout::PIXEL_CLOCK_RANGE);
    DetailedTiming {
        pixel_clock_mhz: f64::from(pixel_clock) / layout::PIXEL_CLOCK_UNITS_PER_MHZ,
        h_active: reader.read_split(layout::H_ACTIVE),
        h_blank: reader.read_split(layout::H_BLANK),
        v_active: reader.read_split(layout::V_ACTIVE),
        v_blank: reader.read_split(layout::V_BLANK),
        h_front_porch: reader.read_split(layout::H_FRONT_PORCH),
        h_sync_pulse: reader.read_split(layout::H_SYNC_PULSE),
        v_front_porch: reader.read_split(layout::V_FRONT_PORCH),
        v_sync_pulse: reader.read_split(layout::V_SYNC_PULSE),
        h_size_mm: reader.read_split(layout::H_SIZE_MM),
        v_size_mm: reader.read_split(layout::V_SIZE_MM),
        h_border: reader.read_u8(layout::H_BORDER_OFFSET),
        v_border: reader.read_u8(layout::V_BORDER_OFFSET),
        features: decode_dtd_features(reader.read_u8(layout::DTD_FEATURES_OFFSET)),
    }
}

fn decode_dtd_features(byte: u8) -> DtdFeatures {
    let stereo = match (bits::field(byte, 5, 2), bits::bit(byte, 0)) {
        (0b00, _) => StereoMode::None,
        (0b01, false) => StereoMode::FieldSequentialRight,
        (0b10, false) => StereoMode::FieldSequentialLeft,
        (0b01, true) => StereoMode::InterleavedRightEven,
        (0b10, true) => StereoMode::InterleavedLeftEven,
        (_, false) => StereoMode::FourWayInterleaved,
        (_, true) => StereoMode::SideBySide,
    };
    let sync = match bits::field(byte, 3, 2) {
        0b11 => SyncType::DigitalSeparate {
            vsync_positive: bits::bit(byte, 2),
            hsync_positive: bits::bit(byte, 1),
        },
        0b10 => SyncType::DigitalComposite {
            serrated: bits::bit(byte, 2),
            hsync_positive: bits::bit(byte, 1),
        },
        _ => SyncType::AnalogComposite {
            bipolar: bits::bit(byte, 3),
            serrated: bits::bit(byte, 2),
            sync_on_all_lines: bits::bit(byte, 1),
        },
    };
    DtdFeatures {
        raw: byte,
        interlaced: bits::bit(byte, 7),
        stereo,
        sync,
    }
}
