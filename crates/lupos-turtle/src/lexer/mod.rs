//! Scanner: one code point of lookahead over a byte source, an accumulation
//! buffer, and the table interpreter that runs the recognizers.
//!
//! What it does
//! - Pulls code points from the [`Decoder`] and keeps the current one, with
//!   its position, as lookahead.
//! - Runs one recognizer per call: clears the buffer, walks the recognizer's
//!   states, and returns a [`Lexeme`] borrowing the buffer, or a
//!   [`LexError`] at the code point that could not be consumed.
//! - Handles deferred code points. A `.` inside a name or after an integer is
//!   only part of the token when more of the token follows, so it is consumed
//!   provisionally and put back (with its position) when the token ends
//!   before it.
//!
//! Invariants
//! - Every recognizer call yields exactly one outcome.
//! - After a successful call the buffer holds the whole lexeme, delimiters
//!   included, and the lookahead is the first code point after it.
//! - Advancing past the end of input is an error, never a silent no-op.
//! - A rejected call reports the code point it could not consume, then puts
//!   any deferred code points back, so the lookahead is the first code point
//!   the call did not keep.
//! - A decoding or source error ends the input: the lookahead becomes end of
//!   input at the position of the bad sequence.

pub(crate) mod automaton;
pub(crate) mod classes;
mod literals;
mod statement;
mod terms;

use alloc::vec::Vec;

use self::automaton::{State, Step, contains};
pub use self::automaton::Production;
use crate::{
    ByteSource, Capture, ErrorKind, LexError, LexerOptions,
    capture::CaptureBuf,
    decoder::{Decoder, Lookahead},
};

/// A recognized token.
///
/// The text borrows the scanner's buffer and is valid until the next
/// recognizer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Production the recognizer accepted.
    pub production: Production,
    /// The lexeme, delimiters included, escapes left undecoded.
    pub text: Capture<'a>,
    /// 1-based line of the first code point.
    pub line: u32,
    /// 1-based column of the first code point.
    pub column: u32,
}

/// Entry points of the recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recognizer {
    /// Start of a statement: a directive keyword or a subject.
    Statement,
    /// Predicate position, including `;` and `.` for empty predicate lists.
    Predicate,
    /// Object position.
    Object,
    /// `<...>`
    IriRef,
    /// `prefix:`
    PnameNs,
    /// Local part of a prefixed name.
    PnLocal,
    /// `_:label`
    BlankNodeLabel,
    /// Any of the four quoted string forms.
    StringLiteral,
    /// Integer, decimal or double.
    Numeric,
    /// `true` or `false`.
    Boolean,
    /// `@tag`
    LangTag,
    /// `;`, `,` or `.`.
    TripleEnd,
    /// Language tag, `^^`, or a terminator after a string.
    LiteralSuffix,
    /// IRI or prefixed name after `^^`.
    DatatypeIri,
    /// Whitespace and comments.
    Whitespace,
}

impl Recognizer {
    /// Every recognizer, in declaration order.
    pub const ALL: [Recognizer; 15] = [
        Recognizer::Statement,
        Recognizer::Predicate,
        Recognizer::Object,
        Recognizer::IriRef,
        Recognizer::PnameNs,
        Recognizer::PnLocal,
        Recognizer::BlankNodeLabel,
        Recognizer::StringLiteral,
        Recognizer::Numeric,
        Recognizer::Boolean,
        Recognizer::LangTag,
        Recognizer::TripleEnd,
        Recognizer::LiteralSuffix,
        Recognizer::DatatypeIri,
        Recognizer::Whitespace,
    ];

    fn entry(self) -> &'static State {
        match self {
            Recognizer::Statement => &statement::STATEMENT,
            Recognizer::Predicate => &statement::PREDICATE,
            Recognizer::Object => &statement::OBJECT,
            Recognizer::IriRef => &terms::IRI_REF,
            Recognizer::PnameNs => &terms::PNAME_NS,
            Recognizer::PnLocal => &terms::PN_LOCAL,
            Recognizer::BlankNodeLabel => &terms::BLANK_NODE_LABEL,
            Recognizer::StringLiteral => &literals::STRING_LITERAL,
            Recognizer::Numeric => &literals::NUMERIC,
            Recognizer::Boolean => &literals::BOOLEAN,
            Recognizer::LangTag => &literals::LANG_TAG,
            Recognizer::TripleEnd => &statement::TRIPLE_END,
            Recognizer::LiteralSuffix => &statement::LITERAL_SUFFIX,
            Recognizer::DatatypeIri => &statement::DATATYPE_IRI,
            Recognizer::Whitespace => &statement::WHITESPACE_RUN,
        }
    }
}

/// A streaming Turtle lexer over a [`ByteSource`].
///
/// # Examples
///
/// ```rust
/// use lupos_turtle::{Production, Scanner};
///
/// let mut scanner = Scanner::new(&b"@prefix ex: <http://example.org/> ."[..]).unwrap();
/// assert_eq!(scanner.statement().unwrap().production, Production::Prefix);
/// scanner.whitespace().unwrap();
/// let ns = scanner.pname_ns().unwrap();
/// assert_eq!(ns.text, "ex:");
/// scanner.whitespace().unwrap();
/// let iri = scanner.iri_ref().unwrap();
/// assert_eq!((iri.production, iri.column), (Production::IriRef, 13));
/// ```
pub struct Scanner<S: ByteSource> {
    decoder: Decoder<S>,
    current: Lookahead,
    /// Code points to hand out again before decoding more; popped from the end.
    replay: Vec<Lookahead>,
    deferred: Vec<Lookahead>,
    text: CaptureBuf,
    start: (u32, u32),
    options: LexerOptions,
}

impl<S: ByteSource> Scanner<S> {
    /// Creates a scanner with default options and reads the first code point.
    ///
    /// # Errors
    ///
    /// Fails when the first code point cannot be decoded.
    pub fn new(source: S) -> Result<Self, LexError<S::Error>> {
        Self::with_options(source, LexerOptions::default())
    }

    /// Creates a scanner and reads the first code point.
    ///
    /// # Errors
    ///
    /// Fails when the first code point cannot be decoded.
    pub fn with_options(source: S, options: LexerOptions) -> Result<Self, LexError<S::Error>> {
        let mut decoder = Decoder::new(source, options.buffer_size, options.utf8);
        let current = decoder
            .next()
            .map_err(|kind| LexError::new(kind, decoder.line(), decoder.column()))?;
        Ok(Self {
            decoder,
            current,
            replay: Vec::new(),
            deferred: Vec::new(),
            text: CaptureBuf::new(options.text_encoding),
            start: (current.line, current.column),
            options,
        })
    }

    /// The options this scanner was built with.
    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// The lookahead code point; `None` at end of input.
    pub fn current(&self) -> Option<u32> {
        self.current.code_point
    }

    /// 1-based line of the lookahead.
    pub fn line(&self) -> u32 {
        self.current.line
    }

    /// 1-based column of the lookahead.
    pub fn column(&self) -> u32 {
        self.current.column
    }

    /// Returns `true` once the input is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.current.code_point.is_none()
    }

    /// The accumulation buffer.
    pub fn text(&self) -> Capture<'_> {
        self.text.as_capture()
    }

    /// Moves to the next code point without accumulating the current one.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::PrematureEndOfStream`] when already at end of input, or
    /// any decoding error for the next code point.
    pub fn advance(&mut self) -> Result<(), LexError<S::Error>> {
        if self.is_at_end() {
            return Err(self.error(ErrorKind::PrematureEndOfStream));
        }
        self.step()
    }

    /// Appends the current code point to the buffer, then advances.
    ///
    /// # Errors
    ///
    /// Same as [`Scanner::advance`].
    pub fn accumulate(&mut self) -> Result<(), LexError<S::Error>> {
        if self.is_at_end() {
            return Err(self.error(ErrorKind::PrematureEndOfStream));
        }
        self.take()
    }

    /// Empties the buffer and marks the lookahead as the start of a lexeme.
    pub fn clear(&mut self) {
        self.text.clear();
        self.deferred.clear();
        self.start = (self.current.line, self.current.column);
    }

    /// Runs `recognizer` from the current position.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnexpectedCharacter`] at the first code point the
    /// recognizer cannot consume, [`ErrorKind::PrematureEndOfStream`] when
    /// the input ends inside the token, or a decoding error.
    pub fn recognize(&mut self, recognizer: Recognizer) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.run(recognizer.entry())
    }

    /// Directive keyword (`@base`, `@prefix`, `BASE`, `PREFIX`) or subject
    /// (IRI, prefix, blank node label).
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn statement(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::Statement)
    }

    /// IRI, prefix, `a`, `;` or `.`.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn predicate(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::Predicate)
    }

    /// IRI, prefix, blank node label, string, number or boolean.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn object(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::Object)
    }

    /// `<...>`
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn iri_ref(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::IriRef)
    }

    /// `prefix:`
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn pname_ns(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::PnameNs)
    }

    /// The local part following a `prefix:`; may be empty.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn pn_local(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::PnLocal)
    }

    /// `_:label`
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn blank_node_label(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::BlankNodeLabel)
    }

    /// One of `"..."`, `'...'`, `"""..."""`, `'''...'''`.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn string_literal(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::StringLiteral)
    }

    /// Integer, decimal or double.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn numeric_literal(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::Numeric)
    }

    /// `true` or `false`.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn boolean_literal(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::Boolean)
    }

    /// `@tag(-subtag)*`
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn lang_tag(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::LangTag)
    }

    /// `;`, `,` or `.`.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn triple_end(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::TripleEnd)
    }

    /// Language tag, `^^`, or a terminator.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn literal_suffix(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::LiteralSuffix)
    }

    /// IRI or prefix after `^^`.
    ///
    /// # Errors
    ///
    /// See [`Scanner::recognize`].
    pub fn datatype_iri(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::DatatypeIri)
    }

    /// Skips whitespace and `#` comments. Succeeds on an empty run and at end
    /// of input.
    ///
    /// # Errors
    ///
    /// Only decoding errors.
    pub fn whitespace(&mut self) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.recognize(Recognizer::Whitespace)
    }

    fn run(&mut self, entry: &'static State) -> Result<Lexeme<'_>, LexError<S::Error>> {
        self.clear();
        let mut state = entry;
        loop {
            let step = self
                .current
                .code_point
                .and_then(|cp| state.step_for(cp, self.options.iri));
            match step {
                Some(Step::Take(next)) => {
                    self.take()?;
                    state = next;
                }
                Some(Step::Skip(next)) => {
                    self.step()?;
                    state = next;
                }
                Some(Step::Defer(next)) => {
                    self.deferred.push(self.current);
                    self.step()?;
                    state = next;
                }
                Some(Step::Hex(digits, next)) => {
                    self.take()?;
                    for _ in 0..digits {
                        match self.current.code_point {
                            Some(cp) if contains(classes::HEX, cp) => self.take()?,
                            _ => return Err(self.reject(state)),
                        }
                    }
                    state = next;
                }
                Some(Step::Finish(production)) => {
                    self.take()?;
                    return Ok(self.accept(state, production));
                }
                Some(Step::Reject) => return Err(self.reject(state)),
                None => match state.otherwise {
                    Some(production) => {
                        self.restore_deferred();
                        return Ok(self.accept(state, production));
                    }
                    None => return Err(self.reject(state)),
                },
            }
        }
    }

    /// Reads the next code point into the lookahead.
    fn step(&mut self) -> Result<(), LexError<S::Error>> {
        if let Some(lookahead) = self.replay.pop() {
            self.current = lookahead;
            return Ok(());
        }
        match self.decoder.next() {
            Ok(lookahead) => {
                self.current = lookahead;
                Ok(())
            }
            Err(kind) => {
                let (line, column) = (self.decoder.line(), self.decoder.column());
                self.current = Lookahead {
                    code_point: None,
                    line,
                    column,
                };
                Err(LexError::new(kind, line, column))
            }
        }
    }

    fn take(&mut self) -> Result<(), LexError<S::Error>> {
        for lookahead in self.deferred.drain(..) {
            if let Some(cp) = lookahead.code_point {
                self.text.push_code_point(cp);
            }
        }
        if let Some(cp) = self.current.code_point {
            self.text.push_code_point(cp);
        }
        self.step()
    }

    /// Puts deferred code points back in front of the lookahead.
    fn restore_deferred(&mut self) {
        if self.deferred.is_empty() {
            return;
        }
        self.replay.push(self.current);
        while let Some(lookahead) = self.deferred.pop() {
            self.replay.push(lookahead);
        }
        if let Some(first) = self.replay.pop() {
            self.current = first;
        }
    }

    fn accept(&self, state: &State, production: Production) -> Lexeme<'_> {
        log::trace!(
            "{production:?} accepted in {} at {}:{}",
            state.name,
            self.start.0,
            self.start.1
        );
        Lexeme {
            production,
            text: self.text.as_capture(),
            line: self.start.0,
            column: self.start.1,
        }
    }

    fn reject(&mut self, state: &State) -> LexError<S::Error> {
        let kind = match self.current.code_point {
            Some(cp) => ErrorKind::UnexpectedCharacter(cp),
            None => ErrorKind::PrematureEndOfStream,
        };
        log::trace!(
            "{} rejected {:?} at {}:{}",
            state.name,
            self.current.code_point.and_then(char::from_u32),
            self.current.line,
            self.current.column
        );
        let err = self.error(kind);
        self.restore_deferred();
        err
    }

    fn error(&self, kind: ErrorKind<S::Error>) -> LexError<S::Error> {
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            panic!(
                "lexical error at {}:{}: {:?}",
                self.current.line,
                self.current.column,
                self.current.code_point
            );
        }
        LexError::new(kind, self.current.line, self.current.column)
    }
}
