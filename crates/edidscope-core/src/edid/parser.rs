use log::{debug, warn};
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

use crate::descriptor::{DetailedTiming, Descriptor, DisplayDescriptor, resolve_descriptor};
use crate::fields::{
    Chromaticity, EstablishedTiming, Features, StandardTiming, VideoInput, decode_chromaticity,
    decode_established_timings, decode_features, decode_gamma, decode_manufacturer_id,
    decode_standard_timings, decode_video_input, manufacturer_timings,
};

use super::error::EdidError;
use super::layout;
use super::reader::EdidReader;

/// Decoded EDID base block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edid {
    pub header: Header,
    pub manufacturer_id: String,
    pub product_code: u16,
    pub serial_number: u32,
    pub manufacture_week: u8,
    pub manufacture_year: u16,
    /// Monday of the manufacture week, when the week is a valid ISO week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<String>,
    pub version: EdidVersion,
    pub input: VideoInput,
    pub h_size_cm: u8,
    pub v_size_cm: u8,
    pub gamma: f64,
    pub features: Features,
    pub chromaticity: Chromaticity,
    pub established_timings: Vec<EstablishedTiming>,
    pub manufacturer_timings: u8,
    pub standard_timings: Vec<StandardTiming>,
    pub descriptors: [Descriptor; 4],
    pub extension_count: u8,
    pub checksum: u8,
    /// The 128 input bytes, kept for raw dumps next to decoded values.
    pub raw: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub valid: bool,
    pub bytes: [u8; 8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdidVersion {
    pub major: u8,
    pub minor: u8,
}

impl Edid {
    /// Display name from the first display-name descriptor, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.descriptors.iter().find_map(|descriptor| match descriptor {
            Descriptor::Display(DisplayDescriptor::DisplayName { text }) => Some(text.as_str()),
            _ => None,
        })
    }

    /// First detailed timing, which is the preferred mode when
    /// `features.preferred_timing_in_first_descriptor` is set.
    pub fn preferred_timing(&self) -> Option<&DetailedTiming> {
        self.descriptors
            .iter()
            .find_map(Descriptor::as_detailed_timing)
    }
}

/// Decode a 128-byte EDID base block.
///
/// The header is checked but a mismatch does not stop decoding; it is
/// reported through `Edid::header.valid`.
///
/// # Errors
/// Returns `EdidError::MalformedInput` when `block` is not exactly 128 bytes.
///
/// # Examples
/// ```
/// use edidscope_core::{EdidError, decode};
///
/// let err = decode(&[0u8; 64]).unwrap_err();
/// assert_eq!(err, EdidError::MalformedInput { expected: 128, actual: 64 });
///
/// let edid = decode(&[0u8; 128]).unwrap();
/// assert!(!edid.header.valid);
/// ```
pub fn decode(block: &[u8]) -> Result<Edid, EdidError> {
    let reader = EdidReader::new(block);
    reader.require_block_len()?;

    let header_bytes = reader.read_array::<8>(layout::HEADER_RANGE)?;
    let header = Header {
        valid: header_bytes == layout::HEADER_MAGIC,
        bytes: header_bytes,
    };
    if !header.valid {
        warn!("EDID header mismatch: {header_bytes:02X?}, decoding anyway");
    }

    let manufacturer_id =
        decode_manufacturer_id(reader.read_array(layout::MANUFACTURER_ID_RANGE)?);
    let manufacture_week = reader.read_u8(layout::MANUFACTURE_WEEK_OFFSET)?;
    let manufacture_year =
        layout::YEAR_BASE + u16::from(reader.read_u8(layout::MANUFACTURE_YEAR_OFFSET)?);
    let version = reader.read_array::<2>(layout::VERSION_RANGE)?;
    debug!(
        "decoding EDID {}.{} from {manufacturer_id}",
        version[0], version[1]
    );

    let established = reader.read_array::<3>(layout::ESTABLISHED_TIMINGS_RANGE)?;
    let mut descriptors = Vec::with_capacity(layout::DESCRIPTOR_RANGES.len());
    for index in 0..layout::DESCRIPTOR_RANGES.len() {
        let descriptor = resolve_descriptor(&reader.read_descriptor_slot(index)?);
        debug!("descriptor {index}: {}", descriptor_label(&descriptor));
        descriptors.push(descriptor);
    }
    let descriptors: [Descriptor; 4] =
        descriptors
            .try_into()
            .map_err(|slots: Vec<Descriptor>| EdidError::OutOfBounds {
                needed: layout::DESCRIPTOR_RANGES.len(),
                actual: slots.len(),
            })?;

    Ok(Edid {
        header,
        manufacturer_id,
        product_code: reader.read_u16_le(layout::PRODUCT_CODE_RANGE)?,
        serial_number: reader.read_u32_le(layout::SERIAL_NUMBER_RANGE)?,
        manufacture_week,
        manufacture_year,
        manufacture_date: manufacture_date(manufacture_year, manufacture_week),
        version: EdidVersion {
            major: version[0],
            minor: version[1],
        },
        input: decode_video_input(reader.read_u8(layout::INPUT_PARAMS_OFFSET)?),
        h_size_cm: reader.read_u8(layout::H_SIZE_CM_OFFSET)?,
        v_size_cm: reader.read_u8(layout::V_SIZE_CM_OFFSET)?,
        gamma: decode_gamma(reader.read_u8(layout::GAMMA_OFFSET)?),
        features: decode_features(reader.read_u8(layout::FEATURES_OFFSET)?),
        chromaticity: decode_chromaticity(reader.read_array(layout::CHROMATICITY_RANGE)?),
        established_timings: decode_established_timings(established),
        manufacturer_timings: manufacturer_timings(established),
        standard_timings: decode_standard_timings(
            reader.read_array(layout::STANDARD_TIMINGS_RANGE)?,
        ),
        descriptors,
        extension_count: reader.read_u8(layout::EXTENSION_COUNT_OFFSET)?,
        checksum: reader.read_u8(layout::CHECKSUM_OFFSET)?,
        raw: reader.read_slice(0..layout::EDID_BLOCK_LEN)?.to_vec(),
    })
}

fn manufacture_date(year: u16, week: u8) -> Option<String> {
    if week == 0 {
        return None;
    }
    let date = Date::from_iso_week_date(i32::from(year), week, Weekday::Monday).ok()?;
    Some(format!(
        "{}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    ))
}

fn descriptor_label(descriptor: &Descriptor) -> &'static str {
    match descriptor {
        Descriptor::DetailedTiming(_) => "detailed timing",
        Descriptor::Display(DisplayDescriptor::SerialNumber { .. }) => "serial number",
        Descriptor::Display(DisplayDescriptor::UnspecifiedText { .. }) => "unspecified text",
        Descriptor::Display(DisplayDescriptor::DisplayName { .. }) => "display name",
        Descriptor::Display(DisplayDescriptor::RangeLimits(_)) => "range limits",
        Descriptor::Display(DisplayDescriptor::Unknown { .. }) => "display descriptor",
    }
}
