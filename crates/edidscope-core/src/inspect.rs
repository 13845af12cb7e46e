use std::fs;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::edid::{EdidError, decode};
use crate::source::{BufferSource, EdidSource, InputFormat, SourceError, base_block};
use crate::{InputInfo, Report, make_report};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Decode error: {0}")]
    Decode(#[from] EdidError),
}

pub fn inspect_file(path: &Path, format: InputFormat) -> Result<Report, InspectError> {
    let data = fs::read(path)?;
    inspect_source(path, BufferSource::new(data, format))
}

pub fn inspect_source<S: EdidSource>(path: &Path, mut source: S) -> Result<Report, InspectError> {
    let bytes = source.read_bytes()?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    let (base, extensions) = base_block(&bytes);
    if !extensions.is_empty() {
        info!(
            "ignoring {} extension bytes after the base block",
            extensions.len()
        );
    }
    let edid = decode(base)?;

    let input = InputInfo {
        path: path.to_string_lossy().into_owned(),
        format: source.format(),
        bytes: bytes.len() as u64,
        extension_bytes_ignored: extensions.len() as u64,
    };
    Ok(make_report(input, edid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BinarySource;

    fn minimal_block() -> Vec<u8> {
        let mut block = vec![0u8; 128];
        block[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        block[18] = 1;
        block[19] = 4;
        block
    }

    #[test]
    fn inspect_source_reports_ignored_extensions() {
        let mut data = minimal_block();
        data.extend(std::iter::repeat_n(0xAB, 128));
        let report =
            inspect_source(Path::new("dump.bin"), BinarySource::new(data.as_slice())).unwrap();

        assert_eq!(report.input.bytes, 256);
        assert_eq!(report.input.extension_bytes_ignored, 128);
        assert_eq!(report.input.format, InputFormat::Binary);
        assert!(report.edid.header.valid);
        assert_eq!(report.edid.version.major, 1);
        assert_eq!(report.edid.version.minor, 4);
    }

    #[test]
    fn inspect_source_rejects_short_input() {
        let data = vec![0u8; 127];
        let err = inspect_source(Path::new("short.bin"), BinarySource::new(data.as_slice()))
            .unwrap_err();
        assert!(matches!(
            err,
            InspectError::Decode(EdidError::MalformedInput {
                expected: 128,
                actual: 127
            })
        ));
    }

    #[test]
    fn inspect_source_surfaces_hex_errors() {
        let source = BufferSource::new(b"00 FF F".to_vec(), InputFormat::Hex);
        let err = inspect_source(Path::new("odd.hex"), source).unwrap_err();
        assert!(matches!(err, InspectError::Source(SourceError::OddDigitCount { .. })));
    }

    #[test]
    fn inspect_file_missing_path_is_io_error() {
        let err = inspect_file(Path::new("/nonexistent/edid.bin"), InputFormat::Auto).unwrap_err();
        assert!(matches!(err, InspectError::Io(_)));
    }
}
