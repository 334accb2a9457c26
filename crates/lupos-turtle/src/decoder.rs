//! UTF-8 to code point decoding with line/column accounting.
//!
//! The decoder pulls bytes from a [`ByteSource`] through a fixed-size buffer
//! and yields one code point at a time, each tagged with the position it was
//! read at. Multi-byte sequences may straddle refills.

use alloc::{boxed::Box, vec};

use crate::{ByteSource, ErrorKind, Utf8Mode};

const CR: u32 = 0x0D;
const LF: u32 = 0x0A;

/// A decoded code point (or end of input) and the position it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lookahead {
    pub(crate) code_point: Option<u32>,
    pub(crate) line: u32,
    pub(crate) column: u32,
}

pub(crate) struct Decoder<S> {
    source: S,
    buffer: Box<[u8]>,
    pos: usize,
    len: usize,
    exhausted: bool,
    line: u32,
    column: u32,
    saw_cr: bool,
    mode: Utf8Mode,
}

impl<S: ByteSource> Decoder<S> {
    pub(crate) fn new(source: S, buffer_size: usize, mode: Utf8Mode) -> Self {
        Self {
            source,
            buffer: vec![0u8; buffer_size.max(1)].into_boxed_slice(),
            pos: 0,
            len: 0,
            exhausted: false,
            line: 1,
            column: 1,
            saw_cr: false,
            mode,
        }
    }

    /// Position the next code point will be reported at.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    pub(crate) fn next(&mut self) -> Result<Lookahead, ErrorKind<S::Error>> {
        let (line, column) = (self.line, self.column);
        let Some(lead) = self.next_byte()? else {
            return Ok(Lookahead {
                code_point: None,
                line,
                column,
            });
        };
        let cp = match self.mode {
            Utf8Mode::Permissive => self.decode_permissive(lead)?,
            Utf8Mode::Strict => self.decode_strict(lead)?,
        };
        self.bump(cp);
        Ok(Lookahead {
            code_point: Some(cp),
            line,
            column,
        })
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ErrorKind<S::Error>> {
        if self.pos == self.len {
            if self.exhausted {
                return Ok(None);
            }
            let n = self.source.fill(&mut self.buffer).map_err(ErrorKind::Source)?;
            if n == 0 {
                self.exhausted = true;
                return Ok(None);
            }
            self.pos = 0;
            self.len = n.min(self.buffer.len());
        }
        let b = self.buffer[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }

    fn continuation(&mut self) -> Result<u8, ErrorKind<S::Error>> {
        self.next_byte()?.ok_or(ErrorKind::PrematureEndOfStream)
    }

    fn decode_permissive(&mut self, lead: u8) -> Result<u32, ErrorKind<S::Error>> {
        let (extra, mut cp) = sequence_shape(lead);
        for _ in 0..extra {
            let b = self.continuation()?;
            cp = (cp << 6) | u32::from(b & 0x3F);
        }
        Ok(cp)
    }

    fn decode_strict(&mut self, lead: u8) -> Result<u32, ErrorKind<S::Error>> {
        if (0x80..0xC0).contains(&lead) || lead >= 0xF8 {
            return Err(ErrorKind::InvalidUtf8);
        }
        let (extra, _) = sequence_shape(lead);
        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().skip(1).take(extra) {
            *slot = self.continuation()?;
        }
        match bstr::decode_utf8(&bytes[..=extra]) {
            (Some(ch), n) if n == extra + 1 => Ok(u32::from(ch)),
            _ => Err(ErrorKind::InvalidUtf8),
        }
    }

    fn bump(&mut self, cp: u32) {
        match cp {
            CR => {
                self.line += 1;
                self.column = 1;
                self.saw_cr = true;
            }
            LF if self.saw_cr => self.saw_cr = false,
            LF => {
                self.line += 1;
                self.column = 1;
            }
            _ => {
                self.column += 1;
                self.saw_cr = false;
            }
        }
    }
}

/// Number of continuation bytes and the payload bits carried by `lead`.
fn sequence_shape(lead: u8) -> (usize, u32) {
    if lead & 0x80 == 0 {
        (0, u32::from(lead))
    } else if lead & 0xC0 == 0x80 {
        // Stray continuation byte: stands alone as U+0080..=U+00BF.
        (0, u32::from(lead))
    } else if lead & 0xE0 == 0xC0 {
        (1, u32::from(lead & 0x1F))
    } else if lead & 0xF0 == 0xE0 {
        (2, u32::from(lead & 0x0F))
    } else {
        (3, u32::from(lead & 0x07))
    }
}
