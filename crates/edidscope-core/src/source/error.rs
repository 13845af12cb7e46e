use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex digit '{found}' at offset {position}")]
    InvalidHexDigit { position: usize, found: char },
    #[error("odd number of hex digits ({digits}); every byte needs two digits")]
    OddDigitCount { digits: usize },
    #[error("hex dump is not valid UTF-8 text")]
    NotText,
}
