//! Quoted-printable style byte escaping for free-text card values.
//!
//! # Invariants
//! - Every UTF-8 byte is escaped as `=` plus two lowercase hex digits,
//!   including ASCII letters and digits.
//! - Empty input encodes to empty output.
//! - `decode_escaped(&encode_escaped(s)) == Ok(s)` for every string.

use std::error::Error;
use std::fmt::{Display, Formatter, Write};

/// Escapes every byte of `text` as `=xx`.
pub fn encode_escaped(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.as_bytes() {
        // Writing to a String cannot fail.
        let _ = write!(encoded, "={byte:02x}");
    }
    encoded
}

/// Error returned when escaped text cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not a sequence of `=` + two hex digits; `offset` is in bytes.
    Malformed { offset: usize },
    /// Decoded bytes are not valid UTF-8.
    InvalidUtf8,
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { offset } => write!(f, "malformed escape sequence at byte {offset}"),
            Self::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
        }
    }
}

impl Error for DecodeError {}

/// Reverses [`encode_escaped`]. Hex digits are accepted in either case.
pub fn decode_escaped(encoded: &str) -> Result<String, DecodeError> {
    let raw = encoded.as_bytes();
    if raw.len() % 3 != 0 {
        return Err(DecodeError::Malformed {
            offset: raw.len() - raw.len() % 3,
        });
    }

    let mut bytes = Vec::with_capacity(raw.len() / 3);
    for (index, chunk) in raw.chunks_exact(3).enumerate() {
        let offset = index * 3;
        let [marker, high, low] = [chunk[0], chunk[1], chunk[2]];
        if marker != b'=' || !high.is_ascii_hexdigit() || !low.is_ascii_hexdigit() {
            return Err(DecodeError::Malformed { offset });
        }
        bytes.push((hex_value(high) << 4) | hex_value(low));
    }

    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

// Caller guarantees `digit` is an ASCII hex digit.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
