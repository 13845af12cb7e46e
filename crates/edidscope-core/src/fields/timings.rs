//! Established (bytes 35-37) and standard (bytes 38-53) timings.

use serde::{Deserialize, Serialize};

use crate::common::bits;

/// A legacy video mode advertised through the established timings bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstablishedTiming {
    pub width: u16,
    pub height: u16,
    pub refresh_hz: u8,
}

/// A mode advertised through one standard timing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardTiming {
    pub width: u16,
    pub height: u16,
    pub aspect_ratio: AspectRatio,
    pub refresh_hz: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    Ratio16_10,
    Ratio4_3,
    Ratio5_4,
    Ratio16_9,
}

impl AspectRatio {
    pub fn value(&self) -> f64 {
        match self {
            AspectRatio::Ratio16_10 => 1.6,
            AspectRatio::Ratio4_3 => 4.0 / 3.0,
            AspectRatio::Ratio5_4 => 5.0 / 4.0,
            AspectRatio::Ratio16_9 => 16.0 / 9.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Ratio16_10 => "16:10",
            AspectRatio::Ratio4_3 => "4:3",
            AspectRatio::Ratio5_4 => "5:4",
            AspectRatio::Ratio16_9 => "16:9",
        }
    }
}

const fn mode(width: u16, height: u16, refresh_hz: u8) -> EstablishedTiming {
    EstablishedTiming {
        width,
        height,
        refresh_hz,
    }
}

/// Established timing modes in bitmap order: byte 0 bit 7 first, byte 2 bit 7 last.
pub const ESTABLISHED_MODES: [EstablishedTiming; 17] = [
    mode(720, 400, 70),
    mode(720, 400, 88),
    mode(640, 480, 60),
    mode(640, 480, 67),
    mode(640, 480, 72),
    mode(640, 480, 75),
    mode(800, 600, 56),
    mode(800, 600, 60),
    mode(800, 600, 72),
    mode(800, 600, 75),
    mode(832, 624, 75),
    mode(1024, 768, 87),
    mode(1024, 768, 60),
    mode(1024, 768, 70),
    mode(1024, 768, 75),
    mode(1280, 1024, 75),
    mode(1152, 870, 75),
];

pub const STANDARD_TIMING_UNUSED: [u8; 2] = [0x01, 0x01];

pub fn decode_established_timings(bytes: [u8; 3]) -> Vec<EstablishedTiming> {
    ESTABLISHED_MODES
        .iter()
        .enumerate()
        .filter(|(index, _)| bits::bit(bytes[index / 8], 7 - (index % 8) as u8))
        .map(|(_, mode)| *mode)
        .collect()
}

/// Manufacturer-reserved bits 6-0 of the last established timings byte.
pub fn manufacturer_timings(bytes: [u8; 3]) -> u8 {
    bits::field(bytes[2], 0, 7)
}

pub fn decode_standard_timing(entry: [u8; 2]) -> Option<StandardTiming> {
    if entry == STANDARD_TIMING_UNUSED {
        return None;
    }
    let width = (u16::from(entry[0]) + 31) * 8;
    let aspect_ratio = match bits::field(entry[1], 6, 2) {
        0 => AspectRatio::Ratio16_10,
        1 => AspectRatio::Ratio4_3,
        2 => AspectRatio::Ratio5_4,
        _ => AspectRatio::Ratio16_9,
    };
    let height = (f64::from(width) / aspect_ratio.value()).round() as u16;
    Some(StandardTiming {
        width,
        height,
        aspect_ratio,
        refresh_hz: bits::field(entry[1], 0, 6) + 60,
    })
}

pub fn decode_standard_timings(bytes: [u8; 16]) -> Vec<StandardTiming> {
    bytes
        .chunks_exact(2)
        .filter_map(|entry| decode_standard_timing([entry[0], entry[1]]))
        .collect()
}
