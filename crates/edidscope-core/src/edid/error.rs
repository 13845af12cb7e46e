use thiserror::Error;

/// Errors returned by EDID block decoding.
///
/// Only structural problems surface here. Unexpected field values decode to
/// explicit `Unknown`/`Reserved` variants instead.
///
/// # Examples
/// ```
/// use edidscope_core::EdidError;
///
/// let err = EdidError::MalformedInput { expected: 128, actual: 64 };
/// assert!(err.to_string().contains("malformed input"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EdidError {
    #[error("malformed input: expected {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },
    #[error("field out of bounds: need {needed} bytes, got {actual}")]
    OutOfBounds { needed: usize, actual: usize },
}
