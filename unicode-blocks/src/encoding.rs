//! Byte level encodings of a single code point.
//!
//! Everything here operates on a `u32` rather than a `char` so that
//! callers can hand over values straight from user input or from a
//! block range; surrogates and values beyond the unicode range are
//! rejected with `Error::InvalidCodePoint`.
use crate::error::{Error, Result};

/// The surrogate range, reserved for UTF-16 pairs and not
/// encodable on its own.
pub const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

pub fn is_surrogate(code_point: u32) -> bool {
    SURROGATES.contains(&code_point)
}

/// Resolve a code point to a scalar value
pub fn scalar(code_point: u32) -> Result<char> {
    char::from_u32(code_point).ok_or(Error::InvalidCodePoint(code_point))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf32Be,
    Utf8,
    Utf16Le,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf32Be => "UTF-32BE",
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
        }
    }

    pub fn encode(self, code_point: u32) -> Result<Vec<u8>> {
        match self {
            Self::Utf32Be => to_utf32be(code_point).map(|b| b.to_vec()),
            Self::Utf8 => to_utf8(code_point),
            Self::Utf16Le => to_utf16le(code_point),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn to_utf32be(code_point: u32) -> Result<[u8; 4]> {
    let c = scalar(code_point)?;
    Ok((c as u32).to_be_bytes())
}

pub fn to_utf8(code_point: u32) -> Result<Vec<u8>> {
    let c = scalar(code_point)?;
    let mut buf = [0u8; 4];
    Ok(c.encode_utf8(&mut buf).as_bytes().to_vec())
}

pub fn to_utf16le(code_point: u32) -> Result<Vec<u8>> {
    let c = scalar(code_point)?;
    let mut units = [0u16; 2];
    Ok(c.encode_utf16(&mut units)
        .iter()
        .flat_map(|unit| unit.to_le_bytes())
        .collect())
}

/// Lowercase hex, two digits per byte and no separators
pub fn hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hexadecimal code point such as `1f600`.
/// Surrounding whitespace and a leading `0x` or `U+` are permitted.
pub fn from_hex_string(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let digits = ["0x", "0X", "U+", "u+"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);

    // from_str_radix tolerates a leading sign, which is not a code point
    if digits.starts_with(|c: char| c == '+' || c == '-') {
        return Err(Error::InvalidHex {
            input: s.to_string(),
            reason: "unexpected sign".to_string(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|err| Error::InvalidHex {
        input: s.to_string(),
        reason: err.to_string(),
    })
}

pub fn from_character(c: char) -> u32 {
    c as u32
}
