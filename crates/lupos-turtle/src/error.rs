use core::convert::Infallible;

use thiserror::Error;

/// A lexical error, positioned at the code point that could not be consumed.
///
/// Lines and columns are numbered from 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct LexError<E = Infallible> {
    pub(crate) kind: ErrorKind<E>,
    pub(crate) line: u32,
    pub(crate) column: u32,
}

impl<E> LexError<E> {
    pub(crate) fn new(kind: ErrorKind<E>, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind<E> {
        &self.kind
    }

    /// 1-based line of the offending position.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the offending position.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The rejected code point, for [`ErrorKind::UnexpectedCharacter`].
    pub fn code_point(&self) -> Option<u32> {
        match self.kind {
            ErrorKind::UnexpectedCharacter(cp) => Some(cp),
            _ => None,
        }
    }

    /// Returns `true` when the input ended in the middle of a token.
    pub fn is_premature_end(&self) -> bool {
        matches!(self.kind, ErrorKind::PrematureEndOfStream)
    }
}

/// Error taxonomy of the lexer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind<E = Infallible> {
    /// The current code point matches no branch of the active state.
    #[error("unexpected character U+{0:04X}")]
    UnexpectedCharacter(u32),
    /// End of input while a recognizer or the decoder expected more.
    #[error("unexpected end of stream")]
    PrematureEndOfStream,
    /// Malformed UTF-8, reported only by `Utf8Mode::Strict`.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
    /// The byte source failed.
    #[error("byte source error: {0}")]
    Source(E),
}
