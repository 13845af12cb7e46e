//! Gamma (byte 23) and supported features (byte 24).

use serde::{Deserialize, Serialize};

use crate::common::bits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub dpms_standby: bool,
    pub dpms_suspend: bool,
    pub dpms_active_off: bool,
    pub color_encoding: ColorEncoding,
    pub srgb_default: bool,
    pub preferred_timing_in_first_descriptor: bool,
    pub continuous_timings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorEncoding {
    Rgb444,
    Rgb444YCrCb444,
    Rgb444YCrCb422,
    Rgb444YCrCb444YCrCb422,
}

impl ColorEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            ColorEncoding::Rgb444 => "RGB 4:4:4",
            ColorEncoding::Rgb444YCrCb444 => "RGB 4:4:4 + YCrCb 4:4:4",
            ColorEncoding::Rgb444YCrCb422 => "RGB 4:4:4 + YCrCb 4:2:2",
            ColorEncoding::Rgb444YCrCb444YCrCb422 => "RGB 4:4:4 + YCrCb 4:4:4 + YCrCb 4:2:2",
        }
    }
}

/// Display gamma stored as `(gamma * 100) - 100`.
pub fn decode_gamma(raw: u8) -> f64 {
    (f64::from(raw) + 100.0) / 100.0
}

pub fn decode_features(byte: u8) -> Features {
    Features {
        dpms_standby: bits::bit(byte, 7),
        dpms_suspend: bits::bit(byte, 6),
        dpms_active_off: bits::bit(byte, 5),
        color_encoding: match bits::field(byte, 3, 2) {
            0 => ColorEncoding::Rgb444,
            1 => ColorEncoding::Rgb444YCrCb444,
            2 => ColorEncoding::Rgb444YCrCb422,
            _ => ColorEncoding::Rgb444YCrCb444YCrCb422,
        },
        srgb_default: bits::bit(byte, 2),
        preferred_timing_in_first_descriptor: bits::bit(byte, 1),
        continuous_timings: bits::bit(byte, 0),
    }
}
