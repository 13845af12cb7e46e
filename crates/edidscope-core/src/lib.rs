//! edidscope core library for offline EDID inspection.
//!
//! This crate implements the decode pipeline used by the CLI: byte sources
//! read hex or binary dumps, the inspection layer splits off the 128-byte base
//! block and drives the decoder (layout/reader/parser), and the result is
//! wrapped in a versioned report. Decoding is byte-oriented and side-effect
//! free; all I/O is isolated in `source` and `inspect`.
//!
//! Invariants:
//! - Decoding the same block always yields the same report.
//! - Only a wrong block length aborts decoding; an invalid header is reported.
//! - Unknown encodings surface as explicit `Unknown`/`Reserved` values.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use edidscope_core::{InputFormat, inspect_file};
//!
//! let report = inspect_file(Path::new("/sys/class/drm/card0-HDMI-A-1/edid"), InputFormat::Auto)?;
//! println!("manufacturer: {}", report.edid.manufacturer_id);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod common;
pub mod descriptor;
pub mod edid;
pub mod fields;
mod inspect;
mod source;

pub use descriptor::{
    CvtAspectRatio, CvtSupport, Descriptor, DetailedTiming, DisplayDescriptor, DtdFeatures,
    RangeLimits, RangeTiming, ScalingSupport, SecondaryGtf, StereoMode, SyncType,
    resolve_descriptor,
};
pub use edid::{Edid, EdidError, EdidVersion, Header, decode};
pub use fields::{
    AnalogInput, AspectRatio, Chromaticity, CiePoint, ColorEncoding, DigitalInput,
    DigitalInterface, EstablishedTiming, Features, SignalLevel, StandardTiming, VideoInput,
};
pub use inspect::{InspectError, inspect_file, inspect_source};
pub use source::{
    BinarySource, BufferSource, EdidSource, HexDumpSource, InputFormat, SourceError, base_block,
    detect_format, parse_hex_dump,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Versioned envelope around a decoded base block.
///
/// # Examples
/// ```
/// use edidscope_core::{InputFormat, InputInfo, decode, make_report};
///
/// let mut block = [0u8; 128];
/// block[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
/// let edid = decode(&block)?;
/// let input = InputInfo {
///     path: "dump.bin".to_string(),
///     format: InputFormat::Binary,
///     bytes: 128,
///     extension_bytes_ignored: 0,
/// };
/// let report = make_report(input, edid);
/// assert_eq!(report.report_version, edidscope_core::REPORT_VERSION);
/// # Ok::<(), edidscope_core::EdidError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input dump metadata.
    pub input: InputInfo,
    /// Decoded base block.
    pub edid: Edid,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "edidscope").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input dump metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the inspector.
    pub path: String,
    /// Resolved input encoding.
    pub format: InputFormat,
    /// Number of EDID bytes read from the input.
    pub bytes: u64,
    /// Bytes past the base block (extension blocks), never decoded.
    pub extension_bytes_ignored: u64,
}

/// Wrap a decoded block in a report stamped with this tool's name and version.
///
/// # Examples
/// ```
/// use edidscope_core::{InputFormat, InputInfo, decode, make_report};
///
/// let edid = decode(&[0u8; 128])?;
/// let input = InputInfo {
///     path: "-".to_string(),
///     format: InputFormat::Hex,
///     bytes: 128,
///     extension_bytes_ignored: 0,
/// };
/// let report = make_report(input, edid);
/// assert_eq!(report.tool.name, "edidscope");
/// assert!(!report.edid.header.valid);
/// # Ok::<(), edidscope_core::EdidError>(())
/// ```
pub fn make_report(input: InputInfo, edid: Edid) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "edidscope".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input,
        edid,
    }
}
