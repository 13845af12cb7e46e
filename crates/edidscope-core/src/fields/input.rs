//! Video input definition (byte 20).

use serde::{Deserialize, Serialize};

use crate::common::bits;

/// Decoded video input parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoInput {
    Analog(AnalogInput),
    Digital(DigitalInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalogInput {
    pub signal_level: SignalLevel,
    pub blank_to_black_setup: bool,
    pub separate_sync: bool,
    pub composite_sync: bool,
    pub sync_on_green: bool,
    pub vsync_serrated: bool,
}

/// Video white and sync levels relative to blank, in volts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLevel {
    /// +0.700 / -0.300 V
    Level700_300,
    /// +0.714 / -0.286 V
    Level714_286,
    /// +1.000 / -0.400 V
    Level1000_400,
    /// +0.700 / 0.000 V
    Level700_000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalInput {
    /// Raw 3-bit colour depth code (bits 6-4).
    pub bit_depth_code: u8,
    /// Bits per colour channel, `code * 2 + 4`.
    pub bits_per_color: u8,
    pub interface: DigitalInterface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalInterface {
    Undefined,
    HdmiA,
    HdmiB,
    Mddi,
    DisplayPort,
    Unknown(u8),
}

impl SignalLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SignalLevel::Level700_300 => "0.700/0.300 V",
            SignalLevel::Level714_286 => "0.714/0.286 V",
            SignalLevel::Level1000_400 => "1.000/0.400 V",
            SignalLevel::Level700_000 => "0.700/0.000 V",
        }
    }
}

impl DigitalInterface {
    pub fn label(&self) -> String {
        match self {
            DigitalInterface::Undefined => "undefined".to_string(),
            DigitalInterface::HdmiA => "HDMIa".to_string(),
            DigitalInterface::HdmiB => "HDMIb".to_string(),
            DigitalInterface::Mddi => "MDDI".to_string(),
            DigitalInterface::DisplayPort => "DisplayPort".to_string(),
            DigitalInterface::Unknown(code) => format!("Unknown ({code})"),
        }
    }
}

pub fn decode_video_input(byte: u8) -> VideoInput {
    if bits::bit(byte, 7) {
        let bit_depth_code = bits::field(byte, 4, 3);
        VideoInput::Digital(DigitalInput {
            bit_depth_code,
            bits_per_color: bit_depth_code * 2 + 4,
            interface: decode_interface(bits::field(byte, 0, 3)),
        })
    } else {
        VideoInput::Analog(AnalogInput {
            signal_level: match bits::field(byte, 5, 2) {
                0 => SignalLevel::Level700_300,
                1 => SignalLevel::Level714_286,
                2 => SignalLevel::Level1000_400,
                _ => SignalLevel::Level700_000,
            },
            blank_to_black_setup: bits::bit(byte, 4),
            separate_sync: bits::bit(byte, 3),
            composite_sync: bits::bit(byte, 2),
            sync_on_green: bits::bit(byte, 1),
            vsync_serrated: bits::bit(byte, 0),
        })
    }
}

fn decode_interface(code: u8) -> DigitalInterface {
    match code {
        0 => DigitalInterface::Undefined,
        2 => DigitalInterface::HdmiA,
        3 => DigitalInterface::HdmiB,
        4 => DigitalInterface::Mddi,
        5 => DigitalInterface::DisplayPort,
        other => DigitalInterface::Unknown(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digital_displayport_eight_bit() {
        // 0xA5: digital, code 2, DisplayPort
        let input = decode_video_input(0xA5);
        assert_eq!(
            input,
            VideoInput::Digital(DigitalInput {
                bit_depth_code: 2,
                bits_per_color: 8,
                interface: DigitalInterface::DisplayPort,
            })
        );
    }

    #[test]
    fn digital_depth_follows_linear_formula() {
        let depths: Vec<u8> = (0..8u8)
            .map(|code| match decode_video_input(0x80 | (code << 4)) {
                VideoInput::Digital(digital) => digital.bits_per_color,
                VideoInput::Analog(_) => panic!("expected digital input"),
            })
            .collect();
        assert_eq!(depths, vec![4, 6, 8, 10, 12, 14, 16, 18]);
    }

    #[test]
    fn digital_unknown_interface_is_kept() {
        match decode_video_input(0x81) {
            VideoInput::Digital(digital) => {
                assert_eq!(digital.interface, DigitalInterface::Unknown(1))
            }
            VideoInput::Analog(_) => panic!("expected digital input"),
        }
        match decode_video_input(0x80) {
            VideoInput::Digital(digital) => {
                assert_eq!(digital.interface, DigitalInterface::Undefined)
            }
            VideoInput::Analog(_) => panic!("expected digital input"),
        }
    }

    #[test]
    fn analog_flags() {
        // 0x0E: 0.700/0.300, separate sync, composite sync, sync on green
        let input = decode_video_input(0x0E);
        assert_eq!(
            input,
            VideoInput::Analog(AnalogInput {
                signal_level: SignalLevel::Level700_300,
                blank_to_black_setup: false,
                separate_sync: true,
                composite_sync: true,
                sync_on_green: true,
                vsync_serrated: false,
            })
        );
    }

    #[test]
    fn analog_signal_level_from_bits_6_5() {
        match decode_video_input(0x60) {
            VideoInput::Analog(analog) => {
                assert_eq!(analog.signal_level, SignalLevel::Level700_000)
            }
            VideoInput::Digital(_) => panic!("expected analog input"),
        }
    }

    #[test]
    fn digital_input_serializes_with_kind_tag() {
        let value = serde_json::to_value(decode_video_input(0xA5)).unwrap();
        assert_eq!(value["kind"], "digital");
        assert_eq!(value["interface"], "display_port");
    }
}
