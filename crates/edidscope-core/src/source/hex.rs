//! Hex dump normalisation.
//!
//! Accepts the shapes EDID dumps usually come in: `00 ff ff ...`,
//! `0x00, 0xFF, ...`, or one unbroken run of digits per line as printed by
//! `xrandr --verbose`. Tokens are split on whitespace and commas, a leading
//! `0x`/`0X` is dropped per token, and the remaining digits are paired into
//! bytes in order.

use super::error::SourceError;

const TOKEN_PREFIXES: [&str; 2] = ["0x", "0X"];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Parse a textual hex dump into bytes.
///
/// # Errors
/// `InvalidHexDigit` reports the byte offset of the first non-hex character
/// in `text`; `OddDigitCount` is returned when the digits do not pair up.
///
/// # Examples
/// ```
/// use edidscope_core::parse_hex_dump;
///
/// let bytes = parse_hex_dump("0x00, 0xFF\nff00").unwrap();
/// assert_eq!(bytes, vec![0x00, 0xFF, 0xFF, 0x00]);
/// ```
pub fn parse_hex_dump(text: &str) -> Result<Vec<u8>, SourceError> {
    let mut nibbles = Vec::with_capacity(text.len());
    let mut rest = text;
    let mut offset = 0usize;

    while !rest.is_empty() {
        let token_len = rest.find(is_separator).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(token_len);
        push_token(token, offset, &mut nibbles)?;
        offset += token_len;

        let separators = tail
            .find(|c: char| !is_separator(c))
            .unwrap_or(tail.len());
        offset += separators;
        rest = &tail[separators..];
    }

    if nibbles.len() % 2 != 0 {
        return Err(SourceError::OddDigitCount {
            digits: nibbles.len(),
        });
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

fn push_token(token: &str, offset: usize, nibbles: &mut Vec<u8>) -> Result<(), SourceError> {
    let (digits, skipped) = TOKEN_PREFIXES
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix).map(|rest| (rest, prefix.len())))
        .unwrap_or((token, 0));

    for (index, c) in digits.char_indices() {
        let nibble = c.to_digit(16).ok_or(SourceError::InvalidHexDigit {
            position: offset + skipped + index,
            found: c,
        })?;
        nibbles.push(nibble as u8);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_hex_dump;
    use crate::source::error::SourceError;

    #[test]
    fn plain_spaced_bytes() {
        assert_eq!(
            parse_hex_dump("00 ff FF 7a").unwrap(),
            vec![0x00, 0xFF, 0xFF, 0x7A]
        );
    }

    #[test]
    fn prefixed_and_comma_separated() {
        assert_eq!(
            parse_hex_dump("0x00,0xFF, 0Xab ,\n0x10").unwrap(),
            vec![0x00, 0xFF, 0xAB, 0x10]
        );
    }

    #[test]
    fn continuous_lines() {
        let text = "\t\t00ffffffffffff00\n\t\t10ac\n";
        assert_eq!(
            parse_hex_dump(text).unwrap(),
            vec![0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x10, 0xAC]
        );
    }

    #[test]
    fn formats_are_equivalent() {
        let a = parse_hex_dump("00 FF 10 AC").unwrap();
        let b = parse_hex_dump("0x00, 0xff, 0x10, 0xac").unwrap();
        let c = parse_hex_dump("00FF10AC").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn empty_text_is_empty() {
        assert!(parse_hex_dump("  \n ").unwrap().is_empty());
    }

    #[test]
    fn invalid_digit_reports_offset() {
        let err = parse_hex_dump("00 0xFG").unwrap_err();
        match err {
            SourceError::InvalidHexDigit { position, found } => {
                assert_eq!(position, 6);
                assert_eq!(found, 'G');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn odd_digit_count_is_rejected() {
        let err = parse_hex_dump("00 f").unwrap_err();
        assert!(matches!(err, SourceError::OddDigitCount { digits: 3 }));
    }
}
