use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::TextEncoding;

/// The buffer used to build the current lexeme.
///
/// - `Utf16(Vec<u16>)`: code units; supplementary characters become surrogate
///   pairs.
/// - `Utf8(String)`: text; invalid scalar values become U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CaptureBuf {
    Utf16(Vec<u16>),
    Utf8(String),
}

impl CaptureBuf {
    pub(crate) fn new(encoding: TextEncoding) -> Self {
        match encoding {
            TextEncoding::Utf16 => CaptureBuf::Utf16(Vec::new()),
            TextEncoding::Utf8 => CaptureBuf::Utf8(String::new()),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            CaptureBuf::Utf16(units) => units.clear(),
            CaptureBuf::Utf8(s) => s.clear(),
        }
    }

    pub(crate) fn push_code_point(&mut self, cp: u32) {
        match self {
            CaptureBuf::Utf16(units) => push_utf16(units, cp),
            CaptureBuf::Utf8(s) => s.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)),
        }
    }

    pub(crate) fn as_capture(&self) -> Capture<'_> {
        match self {
            CaptureBuf::Utf16(units) => Capture::Utf16(units),
            CaptureBuf::Utf8(s) => Capture::Utf8(s),
        }
    }
}

/// Appends `cp` as one code unit, or as a surrogate pair above the BMP.
///
/// Code points are not validated: lone surrogates decoded in permissive mode
/// are stored as-is, and values above U+10FFFF keep only the low 20 bits of
/// their offset.
pub(crate) fn push_utf16(units: &mut Vec<u16>, cp: u32) {
    if cp < 0x1_0000 {
        #[allow(clippy::cast_possible_truncation)]
        units.push(cp as u16);
    } else {
        let v = cp - 0x1_0000;
        #[allow(clippy::cast_possible_truncation)]
        {
            units.push(0xD800 + ((v >> 10) & 0x3FF) as u16);
            units.push(0xDC00 + (v & 0x3FF) as u16);
        }
    }
}

/// Text of a recognized lexeme, borrowed from the scanner.
///
/// The variant follows [`LexerOptions::text_encoding`](crate::LexerOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'a> {
    /// UTF-16 code units.
    Utf16(&'a [u16]),
    /// UTF-8 text.
    Utf8(&'a str),
}

impl Capture<'_> {
    /// Number of code units (UTF-16) or bytes (UTF-8).
    pub fn len(&self) -> usize {
        match self {
            Capture::Utf16(units) => units.len(),
            Capture::Utf8(s) => s.len(),
        }
    }

    /// Returns `true` for an empty lexeme.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The UTF-16 code units, when the capture holds them.
    pub fn as_utf16(&self) -> Option<&[u16]> {
        match self {
            Capture::Utf16(units) => Some(units),
            Capture::Utf8(_) => None,
        }
    }

    /// The UTF-8 text, when the capture holds it.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Capture::Utf8(s) => Some(s),
            Capture::Utf16(_) => None,
        }
    }

    /// Copies the lexeme into a `String`, replacing unpaired surrogates with
    /// U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        match self {
            Capture::Utf8(s) => (*s).to_string(),
            Capture::Utf16(units) => char::decode_utf16(units.iter().copied())
                .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
        }
    }
}

impl fmt::Display for Capture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capture::Utf8(s) => f.write_str(s),
            Capture::Utf16(units) => {
                for ch in char::decode_utf16(units.iter().copied()) {
                    fmt::Write::write_char(f, ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
                }
                Ok(())
            }
        }
    }
}

impl PartialEq<str> for Capture<'_> {
    fn eq(&self, other: &str) -> bool {
        match self {
            Capture::Utf8(s) => *s == other,
            Capture::Utf16(units) => units.iter().copied().eq(other.encode_utf16()),
        }
    }
}

impl PartialEq<&str> for Capture<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
