//! Byte sources feeding the decoder.
//!
//! Sources own stream I/O. They yield the raw byte sequence of a dump (base
//! block plus any extension blocks); the inspection layer reads whole files,
//! splits off the base block and hands it to the decoder.

mod error;
mod hex;

pub use error::SourceError;
pub use hex::parse_hex_dump;

use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::edid::layout::{EDID_BLOCK_LEN, HEADER_MAGIC};

/// Encoding of an input dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Decide from the content: binary when it starts with the EDID header
    /// or is not UTF-8, hex text otherwise.
    #[default]
    Auto,
    Hex,
    Binary,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Auto => "auto",
            InputFormat::Hex => "hex",
            InputFormat::Binary => "binary",
        }
    }
}

pub trait EdidSource {
    /// Concrete format of the bytes this source yields (never `Auto`).
    fn format(&self) -> InputFormat;
    fn read_bytes(&mut self) -> Result<Vec<u8>, SourceError>;
}

/// Reads a textual hex dump from any reader.
pub struct HexDumpSource<R> {
    reader: R,
}

impl<R: Read> HexDumpSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> EdidSource for HexDumpSource<R> {
    fn format(&self) -> InputFormat {
        InputFormat::Hex
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>, SourceError> {
        let mut raw = Vec::new();
        self.reader.read_to_end(&mut raw)?;
        let text = std::str::from_utf8(&raw).map_err(|_| SourceError::NotText)?;
        parse_hex_dump(text)
    }
}

/// Reads raw EDID bytes (e.g. `/sys/class/drm/*/edid`) from any reader.
pub struct BinarySource<R> {
    reader: R,
}

impl<R: Read> BinarySource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> EdidSource for BinarySource<R> {
    fn format(&self) -> InputFormat {
        InputFormat::Binary
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>, SourceError> {
        let mut raw = Vec::new();
        self.reader.read_to_end(&mut raw)?;
        Ok(raw)
    }
}

/// In-memory dump with its format resolved up front.
pub struct BufferSource {
    data: Vec<u8>,
    format: InputFormat,
}

impl BufferSource {
    pub fn new(data: Vec<u8>, format: InputFormat) -> Self {
        let format = match format {
            InputFormat::Auto => detect_format(&data),
            explicit => explicit,
        };
        debug!("input format resolved to {}", format.as_str());
        Self { data, format }
    }
}

impl EdidSource for BufferSource {
    fn format(&self) -> InputFormat {
        self.format
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>, SourceError> {
        match self.format {
            InputFormat::Binary => Ok(self.data.clone()),
            InputFormat::Hex | InputFormat::Auto => {
                HexDumpSource::new(self.data.as_slice()).read_bytes()
            }
        }
    }
}

pub fn detect_format(data: &[u8]) -> InputFormat {
    if data.starts_with(&HEADER_MAGIC) || std::str::from_utf8(data).is_err() {
        InputFormat::Binary
    } else {
        InputFormat::Hex
    }
}

/// Split a dump into the base block and whatever follows it.
///
/// Shorter dumps are returned whole so the decoder can report the length.
pub fn base_block(bytes: &[u8]) -> (&[u8], &[u8]) {
    bytes.split_at(bytes.len().min(EDID_BLOCK_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_binary_by_header() {
        let mut data = vec![0u8; 128];
        data[..8].copy_from_slice(&HEADER_MAGIC);
        assert_eq!(detect_format(&data), InputFormat::Binary);
    }

    #[test]
    fn detect_binary_by_invalid_utf8() {
        assert_eq!(detect_format(&[0xC3, 0x28, 0x00]), InputFormat::Binary);
    }

    #[test]
    fn detect_hex_text() {
        assert_eq!(detect_format(b"00 ff ff ff"), InputFormat::Hex);
    }

    #[test]
    fn buffer_source_parses_hex() {
        let mut source = BufferSource::new(b"00 FF 10 AC".to_vec(), InputFormat::Auto);
        assert_eq!(source.format(), InputFormat::Hex);
        assert_eq!(source.read_bytes().unwrap(), vec![0x00, 0xFF, 0x10, 0xAC]);
    }

    #[test]
    fn buffer_source_forced_binary_keeps_bytes() {
        let mut source = BufferSource::new(b"00 FF".to_vec(), InputFormat::Binary);
        assert_eq!(source.read_bytes().unwrap(), b"00 FF".to_vec());
    }

    #[test]
    fn hex_source_rejects_non_utf8() {
        let data: &[u8] = &[0xFF, 0xFE];
        let err = HexDumpSource::new(data).read_bytes().unwrap_err();
        assert!(matches!(err, SourceError::NotText));
    }

    #[test]
    fn binary_source_reads_everything() {
        let data: &[u8] = &[1, 2, 3];
        assert_eq!(BinarySource::new(data).read_bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn base_block_separates_extensions() {
        let bytes = vec![0u8; 256];
        let (base, rest) = base_block(&bytes);
        assert_eq!(base.len(), 128);
        assert_eq!(rest.len(), 128);

        let short = vec![0u8; 100];
        let (base, rest) = base_block(&short);
        assert_eq!(base.len(), 100);
        assert!(rest.is_empty());
    }
}
