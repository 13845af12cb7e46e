//! Chromaticity coordinates (bytes 25-34).
//!
//! Each coordinate is a 10-bit binary fraction. Bytes 0-1 of the block carry
//! the two low bits of every coordinate; bytes 2-9 carry the high eight bits
//! as red, green, blue and white (x, y) pairs.

use serde::{Deserialize, Serialize};

use crate::common::bits;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    pub red: CiePoint,
    pub green: CiePoint,
    pub blue: CiePoint,
    pub white: CiePoint,
}

/// CIE 1931 xy coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CiePoint {
    pub x: f64,
    pub y: f64,
}

const COORDINATE_SCALE: f64 = 1024.0;

pub fn decode_chromaticity(bytes: [u8; 10]) -> Chromaticity {
    // Low-bit pairs for rx, ry, gx, gy, bx, by, wx, wy in order.
    let lsbs = [
        bits::field(bytes[0], 6, 2),
        bits::field(bytes[0], 4, 2),
        bits::field(bytes[0], 2, 2),
        bits::field(bytes[0], 0, 2),
        bits::field(bytes[1], 6, 2),
        bits::field(bytes[1], 4, 2),
        bits::field(bytes[1], 2, 2),
        bits::field(bytes[1], 0, 2),
    ];
    let coordinate = |index: usize| {
        let value = bits::split_field(lsbs[index], 2, bytes[2 + index]);
        f64::from(value) / COORDINATE_SCALE
    };
    let point = |pair: usize| CiePoint {
        x: coordinate(pair * 2),
        y: coordinate(pair * 2 + 1),
    };

    Chromaticity {
        red: point(0),
        green: point(1),
        blue: point(2),
        white: point(3),
    }
}

#[cfg(test)]
mod tests {
    use super::decode_chromaticity;

    #[test]
    fn all_zero_block_decodes_to_origin() {
        let chroma = decode_chromaticity([0u8; 10]);
        for point in [chroma.red, chroma.green, chroma.blue, chroma.white] {
            assert_eq!(point.x, 0.0);
            assert_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn srgb_primaries() {
        // Typical sRGB panel: R(0.640,0.330) G(0.300,0.600) B(0.150,0.060) W(0.3125,0.3291)
        let chroma = decode_chromaticity([0xEE, 0x91, 0xA3, 0x54, 0x4C, 0x99, 0x26, 0x0F, 0x50, 0x54]);
        assert_eq!(chroma.red.x, 655.0 / 1024.0);
        assert_eq!(chroma.red.y, 338.0 / 1024.0);
        assert_eq!(chroma.green.x, 307.0 / 1024.0);
        assert_eq!(chroma.green.y, 614.0 / 1024.0);
        assert_eq!(chroma.blue.x, 154.0 / 1024.0);
        assert_eq!(chroma.blue.y, 61.0 / 1024.0);
        assert_eq!(chroma.white.x, 320.0 / 1024.0);
        assert_eq!(chroma.white.y, 337.0 / 1024.0);
    }

    #[test]
    fn low_bits_select_the_right_coordinate() {
        let mut bytes = [0u8; 10];
        // only gx low bits set to 0b11
        bytes[0] = 0b0000_1100;
        let chroma = decode_chromaticity(bytes);
        assert_eq!(chroma.green.x, 3.0 / 1024.0);
        assert_eq!(chroma.red.x, 0.0);
        assert_eq!(chroma.green.y, 0.0);
    }
}
