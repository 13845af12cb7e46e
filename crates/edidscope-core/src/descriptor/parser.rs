use log::debug;
use serde::{Deserialize, Serialize};

use super::detailed::{DetailedTiming, decode_detailed_timing};
use super::layout;
use super::range_limits::{RangeLimits, decode_range_limits};
use super::reader::SlotReader;

/// One decoded 18-byte descriptor slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Descriptor {
    DetailedTiming(DetailedTiming),
    Display(DisplayDescriptor),
}

/// Display descriptor sub-variants keyed by the tag byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayDescriptor {
    SerialNumber { text: String },
    UnspecifiedText { text: String },
    DisplayName { text: String },
    RangeLimits(RangeLimits),
    /// Tag without a dedicated decoder; the slot bytes are kept verbatim.
    Unknown {
        tag: u8,
        raw: [u8; layout::DESCRIPTOR_LEN],
    },
}

impl Descriptor {
    pub fn as_detailed_timing(&self) -> Option<&DetailedTiming> {
        match self {
            Descriptor::DetailedTiming(timing) => Some(timing),
            Descriptor::Display(_) => None,
        }
    }

    pub fn as_display(&self) -> Option<&DisplayDescriptor> {
        match self {
            Descriptor::Display(display) => Some(display),
            Descriptor::DetailedTiming(_) => None,
        }
    }
}

/// Classify and decode one descriptor slot.
///
/// Never fails: tags and timing formulas without a decoder degrade to
/// `Unknown`/`Reserved` variants.
pub fn resolve_descriptor(slot: &[u8; layout::DESCRIPTOR_LEN]) -> Descriptor {
    let reader = SlotReader::new(slot);
    if !reader.is_display_descriptor() {
        return Descriptor::DetailedTiming(decode_detailed_timing(&reader));
    }

    let tag = reader.read_u8(layout::TAG_OFFSET);
    let display = match tag {
        layout::TAG_SERIAL_NUMBER => DisplayDescriptor::SerialNumber {
            text: reader.read_text(),
        },
        layout::TAG_UNSPECIFIED_TEXT => DisplayDescriptor::UnspecifiedText {
            text: reader.read_text(),
        },
        layout::TAG_DISPLAY_NAME => DisplayDescriptor::DisplayName {
            text: reader.read_text(),
        },
        layout::TAG_RANGE_LIMITS => DisplayDescriptor::RangeLimits(decode_range_limits(&reader)),
        _ => {
            debug!("display descriptor tag {tag:#04x} has no decoder, keeping raw bytes");
            DisplayDescriptor::Unknown {
                tag,
                raw: reader.raw(),
            }
        }
    };
    Descriptor::Display(display)
}
