//! Uppercase hexadecimal encoding and decoding of byte sequences

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::result::ensure_or;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised while decoding hexadecimal text
pub enum HexError {
    /// Every byte takes two digits; a trailing lone digit is rejected rather than dropped
    #[error("Hex string has odd length ({len})")]
    OddLength {
        /// Length of the rejected input in bytes
        len: usize,
    },
    /// A character outside `0-9`, `a-f`, `A-F`
    #[error("Invalid hex digit {digit:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Byte offset of the character in the input
        offset: usize,
    },
    /// The output buffer passed to [hex_decode] does not fit the input exactly
    #[error("Input decodes to {expected} bytes but the output buffer holds {actual}")]
    LengthMismatch {
        /// Number of bytes the input decodes to
        expected: usize,
        /// Size of the output buffer
        actual: usize,
    },
}

impl HexError {
    fn from_codec(err: ::hex::FromHexError, input: &[u8], output_len: usize) -> Self {
        use ::hex::FromHexError::*;
        match err {
            InvalidHexCharacter { c, index } => {
                // The hex crate reports single bytes; recover the full char for utf-8 input
                let digit = std::str::from_utf8(&input[index..])
                    .ok()
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(c);
                HexError::InvalidDigit {
                    digit,
                    offset: index,
                }
            }
            OddLength => HexError::OddLength { len: input.len() },
            InvalidStringLength => HexError::LengthMismatch {
                expected: input.len() / 2,
                actual: output_len,
            },
        }
    }
}

/// Renders a byte slice as uppercase hex without allocating; see [HexDisplay::fmt_hex]
pub struct HexDisplayHelper<'a>(&'a [u8]);

impl Display for HexDisplayHelper<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for b in self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

/// Extension trait for anything that can be viewed as bytes
///
/// # Examples
///
/// ```rust
/// use extensions_util::hex::HexDisplay;
///
/// let key = [0xDEu8, 0xAD, 0xBE, 0xEF];
/// assert_eq!(format!("key: {}", key.fmt_hex()), "key: DEADBEEF");
/// ```
pub trait HexDisplay {
    /// Display adapter producing the same text as [to_hex_string]
    fn fmt_hex(&self) -> HexDisplayHelper<'_>;
}

impl<T: AsRef<[u8]> + ?Sized> HexDisplay for T {
    fn fmt_hex(&self) -> HexDisplayHelper<'_> {
        HexDisplayHelper(self.as_ref())
    }
}

/// Encode bytes as uppercase hex, two digits per byte.
///
/// # Examples
///
/// ```rust
/// use extensions_util::hex::to_hex_string;
///
/// assert_eq!(to_hex_string([0x00u8, 0xFF, 0x1A]), "00FF1A");
/// assert_eq!(to_hex_string(b""), "");
/// ```
pub fn to_hex_string<B: AsRef<[u8]>>(bytes: B) -> String {
    ::hex::encode_upper(bytes)
}

/// Decode hex text into bytes. Upper and lowercase digits are both accepted.
///
/// # Examples
///
/// ```rust
/// use extensions_util::hex::{from_hex_string, HexError};
///
/// assert_eq!(from_hex_string("00FF1A"), Ok(vec![0x00, 0xFF, 0x1A]));
/// assert_eq!(from_hex_string("00ff1a"), Ok(vec![0x00, 0xFF, 0x1A]));
/// assert_eq!(from_hex_string("ABC"), Err(HexError::OddLength { len: 3 }));
/// assert_eq!(
///     from_hex_string("0G"),
///     Err(HexError::InvalidDigit { digit: 'G', offset: 1 })
/// );
/// ```
pub fn from_hex_string(hex: &str) -> Result<Vec<u8>, HexError> {
    let input = hex.as_bytes();
    ensure_or(input.len() % 2 == 0, HexError::OddLength { len: input.len() })?;
    ::hex::decode(input).map_err(|e| HexError::from_codec(e, input, input.len() / 2))
}

/// Decode hex text into a caller supplied buffer of exactly `input.len() / 2` bytes.
///
/// # Examples
///
/// ```rust
/// use extensions_util::hex::{hex_decode, HexError};
///
/// let mut out = [0u8; 2];
/// hex_decode(b"BEEF", &mut out)?;
/// assert_eq!(out, [0xBE, 0xEF]);
///
/// let mut short = [0u8; 1];
/// assert_eq!(
///     hex_decode(b"BEEF", &mut short),
///     Err(HexError::LengthMismatch { expected: 2, actual: 1 })
/// );
/// # Ok::<(), HexError>(())
/// ```
pub fn hex_decode(input: &[u8], output: &mut [u8]) -> Result<(), HexError> {
    ensure_or(input.len() % 2 == 0, HexError::OddLength { len: input.len() })?;
    ensure_or(
        input.len() / 2 == output.len(),
        HexError::LengthMismatch {
            expected: input.len() / 2,
            actual: output.len(),
        },
    )?;
    let output_len = output.len();
    ::hex::decode_to_slice(input, output).map_err(|e| HexError::from_codec(e, input, output_len))
}
