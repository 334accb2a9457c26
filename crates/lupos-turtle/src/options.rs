/// Default size of the decoder's input buffer, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// How the decoder treats malformed UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf8Mode {
    /// Lead bytes select the sequence length and continuation bytes only
    /// contribute their low six bits. Overlong forms and surrogate encodings
    /// decode to whatever value the bits spell. A stray continuation byte
    /// decodes on its own to the code point with the same value
    /// (U+0080..=U+00BF) and never consumes the bytes after it.
    #[default]
    Permissive,
    /// Every sequence is validated; malformed input raises
    /// [`ErrorKind::InvalidUtf8`](crate::ErrorKind::InvalidUtf8).
    Strict,
}

/// Which characters are allowed between `<` and `>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IriMode {
    /// Anything except an unescaped `>`; `\` must start a `\u`/`\U` escape.
    #[default]
    Permissive,
    /// Additionally rejects `U+0000..=U+0020` and `<"{}|^` backtick, as the
    /// Turtle `IRIREF` production does.
    Strict,
}

/// Representation of the accumulated lexeme text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEncoding {
    /// UTF-16 code units; supplementary characters become surrogate pairs.
    #[default]
    Utf16,
    /// UTF-8 text. Code points that are not Unicode scalar values (only
    /// possible with [`Utf8Mode::Permissive`]) are replaced by U+FFFD.
    Utf8,
}

/// Configuration options for the [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use lupos_turtle::{IriMode, LexerOptions, TextEncoding};
///
/// let options = LexerOptions {
///     iri: IriMode::Strict,
///     text_encoding: TextEncoding::Utf8,
///     ..Default::default()
/// };
/// assert_eq!(options.buffer_size, 8192);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerOptions {
    /// Number of bytes requested from the byte source per refill.
    ///
    /// Any positive size works; multi-byte sequences may straddle refills.
    /// A size of zero is treated as one.
    ///
    /// # Default
    ///
    /// `8192`
    pub buffer_size: usize,

    /// UTF-8 decoding policy.
    ///
    /// # Default
    ///
    /// [`Utf8Mode::Permissive`]
    pub utf8: Utf8Mode,

    /// IRI reference character policy.
    ///
    /// # Default
    ///
    /// [`IriMode::Permissive`]
    pub iri: IriMode,

    /// Accumulation buffer representation.
    ///
    /// # Default
    ///
    /// [`TextEncoding::Utf16`]
    pub text_encoding: TextEncoding,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(feature = "serde", serde(default))]
    /// Panic on lexical errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on failures.
    pub panic_on_error: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            utf8: Utf8Mode::default(),
            iri: IriMode::default(),
            text_encoding: TextEncoding::default(),
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
