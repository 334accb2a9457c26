//! Statement-level Turtle driver.
//!
//! [`TurtleParser`] strings the recognizers together into the `turtleDoc`
//! loop and performs the semantic actions the lexer leaves to its caller:
//! prefix expansion, base resolution, escape decoding and literal typing.
//! It yields one [`Triple`] per `subject predicate object` group, so
//! `:s :p :a, :b ; :q :c .` yields three.
//!
//! Collections, blank node property lists and quoted triples are not
//! supported.

mod term;
mod unescape;

use alloc::{
    collections::BTreeMap,
    format,
    string::{String, ToString},
};
use core::{convert::Infallible, mem};

use oxiri::Iri;
use thiserror::Error;

pub use self::term::{
    Literal, RDF_TYPE, Term, Triple, XSD_BOOLEAN, XSD_DECIMAL, XSD_DOUBLE, XSD_INTEGER,
};
use self::unescape::{unescape_iri, unescape_literal, unescape_local};
use crate::{ByteSource, LexError, LexerOptions, Production, Recognizer, Scanner};

/// Configuration options for [`TurtleParser`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurtleOptions {
    /// Absolute IRI that relative IRI references are resolved against until
    /// the document declares its own base.
    ///
    /// Without a base, relative references are passed through unresolved.
    ///
    /// # Default
    ///
    /// `None`
    pub base: Option<String>,

    /// Whether to continue after an error.
    ///
    /// When `true`, the parser yields the error, skips past the next `.` and
    /// resumes with the next statement. When `false`, iteration ends after
    /// the first error.
    ///
    /// # Default
    ///
    /// `false`
    pub recover_statements: bool,

    /// Options of the underlying [`Scanner`].
    ///
    /// # Default
    ///
    /// [`LexerOptions::default()`]
    pub lexer: LexerOptions,
}

/// Error yielded by [`TurtleParser`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError<E = Infallible> {
    /// The lexer rejected the input.
    #[error("{0}")]
    Lex(LexError<E>),
    /// A prefixed name uses an undeclared prefix.
    #[error("unknown prefix `{prefix}` at {line}:{column}")]
    UnknownPrefix {
        /// The prefix, without the colon.
        prefix: String,
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },
    /// An IRI could not be parsed or resolved against the base.
    #[error("invalid IRI `{iri}` at {line}:{column}: {message}")]
    InvalidIri {
        /// The IRI as written, escapes decoded.
        iri: String,
        /// Why it was rejected.
        message: String,
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },
    /// A `\u` or `\U` escape does not name a Unicode scalar value.
    #[error("invalid escape sequence at {line}:{column}")]
    InvalidEscape {
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },
    /// A well-formed token that does not fit the grammar at this point.
    #[error("unexpected {production:?} at {line}:{column}")]
    UnexpectedToken {
        /// What was found.
        production: Production,
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },
}

impl<E> DocumentError<E> {
    /// 1-based line and column of the offending token or code point.
    pub fn position(&self) -> (u32, u32) {
        match self {
            DocumentError::Lex(err) => (err.line(), err.column()),
            DocumentError::UnknownPrefix { line, column, .. }
            | DocumentError::InvalidIri { line, column, .. }
            | DocumentError::InvalidEscape { line, column }
            | DocumentError::UnexpectedToken { line, column, .. } => (*line, *column),
        }
    }

    fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            DocumentError::Lex(LexError {
                kind: crate::ErrorKind::Source(_),
                ..
            })
        )
    }
}

impl<E> From<LexError<E>> for DocumentError<E> {
    fn from(err: LexError<E>) -> Self {
        DocumentError::Lex(err)
    }
}

/// An owned copy of a lexeme.
#[derive(Debug)]
struct Token {
    production: Production,
    text: String,
    line: u32,
    column: u32,
}

impl Token {
    fn unexpected<E>(&self) -> DocumentError<E> {
        DocumentError::UnexpectedToken {
            production: self.production,
            line: self.line,
            column: self.column,
        }
    }

    /// The text between the delimiters, `n` code units wide on each side.
    fn inner(&self, n: usize) -> &str {
        self.text
            .get(n..self.text.len().saturating_sub(n))
            .unwrap_or_default()
    }

    /// A blank node label without its `_:`.
    fn inner_label(&self) -> String {
        self.text.get(2..).unwrap_or_default().to_string()
    }
}

#[derive(Debug)]
enum Cursor {
    Statement,
    Predicate { subject: Term, continued: bool },
    Object { subject: Term, predicate: Term },
    Done,
}

/// Iterator over the triples of a Turtle document.
///
/// # Examples
///
/// ```rust
/// use lupos_turtle::{Term, TurtleOptions, TurtleParser};
///
/// let doc = b"@prefix ex: <http://example.org/> .\nex:s ex:p \"o\"@en, 42 .";
/// let triples: Vec<_> = TurtleParser::new(&doc[..], TurtleOptions::default())
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(triples.len(), 2);
/// assert_eq!(triples[0].subject, Term::Iri("http://example.org/s".into()));
/// assert_eq!(
///     triples[1].to_string(),
///     "<http://example.org/s> <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> ."
/// );
/// ```
pub struct TurtleParser<S: ByteSource> {
    scanner: Scanner<S>,
    base: Option<Iri<String>>,
    prefixes: BTreeMap<String, String>,
    cursor: Cursor,
    recover: bool,
    /// The last token consumed was a `.`, so the parser already stands at a
    /// statement boundary.
    after_dot: bool,
}

impl<S: ByteSource> TurtleParser<S> {
    /// Creates a parser reading from `source`.
    ///
    /// # Errors
    ///
    /// Fails when `options.base` is not an absolute IRI, or when the first
    /// code point cannot be decoded.
    pub fn new(source: S, options: TurtleOptions) -> Result<Self, DocumentError<S::Error>> {
        let base = match options.base {
            Some(base) => Some(Iri::parse(base.clone()).map_err(|e| {
                DocumentError::InvalidIri {
                    iri: base,
                    message: e.to_string(),
                    line: 1,
                    column: 1,
                }
            })?),
            None => None,
        };
        let mut scanner = Scanner::with_options(source, options.lexer)?;
        if scanner.current() == Some(0xFEFF) {
            scanner.advance()?;
        }
        Ok(Self {
            scanner,
            base,
            prefixes: BTreeMap::new(),
            cursor: Cursor::Statement,
            recover: options.recover_statements,
            after_dot: false,
        })
    }

    /// Prefixes declared so far, without their colons.
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    /// The current base IRI.
    pub fn base(&self) -> Option<&str> {
        self.base.as_ref().map(Iri::as_str)
    }

    /// The underlying scanner.
    pub fn scanner(&self) -> &Scanner<S> {
        &self.scanner
    }

    fn lex(&mut self, recognizer: Recognizer) -> Result<Token, DocumentError<S::Error>> {
        self.after_dot = false;
        let lexeme = self.scanner.recognize(recognizer)?;
        let token = Token {
            production: lexeme.production,
            text: lexeme.text.to_string_lossy(),
            line: lexeme.line,
            column: lexeme.column,
        };
        self.after_dot = token.production == Production::Dot;
        Ok(token)
    }

    fn skip_whitespace(&mut self) -> Result<(), DocumentError<S::Error>> {
        self.scanner.whitespace()?;
        Ok(())
    }

    fn parse(&mut self) -> Result<Option<Triple>, DocumentError<S::Error>> {
        loop {
            match mem::replace(&mut self.cursor, Cursor::Statement) {
                Cursor::Done => {
                    self.cursor = Cursor::Done;
                    return Ok(None);
                }
                Cursor::Statement => {
                    self.skip_whitespace()?;
                    if self.scanner.is_at_end() {
                        self.cursor = Cursor::Done;
                        return Ok(None);
                    }
                    let token = self.lex(Recognizer::Statement)?;
                    self.statement(&token)?;
                }
                Cursor::Predicate { subject, continued } => {
                    self.skip_whitespace()?;
                    let token = self.lex(Recognizer::Predicate)?;
                    match token.production {
                        Production::PredicateList | Production::Dot if !continued => {
                            return Err(token.unexpected());
                        }
                        Production::PredicateList => {
                            self.cursor = Cursor::Predicate {
                                subject,
                                continued: true,
                            };
                        }
                        Production::Dot => {}
                        Production::A => {
                            self.cursor = Cursor::Object {
                                subject,
                                predicate: Term::Iri(RDF_TYPE.into()),
                            };
                        }
                        _ => {
                            let predicate = Term::Iri(self.iri(&token)?);
                            self.cursor = Cursor::Object { subject, predicate };
                        }
                    }
                }
                Cursor::Object { subject, predicate } => {
                    self.skip_whitespace()?;
                    let token = self.lex(Recognizer::Object)?;
                    let (object, end) = self.object(&token)?;
                    self.cursor = match end.production {
                        Production::ObjectList => Cursor::Object {
                            subject: subject.clone(),
                            predicate: predicate.clone(),
                        },
                        Production::PredicateList => Cursor::Predicate {
                            subject: subject.clone(),
                            continued: true,
                        },
                        _ => Cursor::Statement,
                    };
                    return Ok(Some(Triple {
                        subject,
                        predicate,
                        object,
                    }));
                }
            }
        }
    }

    /// Handles the first token of a statement. Leaves the cursor on
    /// `Statement` after a directive, on `Predicate` after a subject.
    fn statement(&mut self, token: &Token) -> Result<(), DocumentError<S::Error>> {
        match token.production {
            Production::Base | Production::SparqlBase => {
                self.skip_whitespace()?;
                let iri_token = self.lex(Recognizer::IriRef)?;
                let iri = self.iri(&iri_token)?;
                if token.production == Production::Base {
                    self.expect_dot()?;
                }
                log::debug!("base <{iri}>");
                self.base = Some(Iri::parse(iri.clone()).map_err(|e| {
                    DocumentError::InvalidIri {
                        iri,
                        message: e.to_string(),
                        line: iri_token.line,
                        column: iri_token.column,
                    }
                })?);
            }
            Production::Prefix | Production::SparqlPrefix => {
                self.skip_whitespace()?;
                let ns = self.lex(Recognizer::PnameNs)?;
                self.skip_whitespace()?;
                let iri_token = self.lex(Recognizer::IriRef)?;
                let iri = self.iri(&iri_token)?;
                if token.production == Production::Prefix {
                    self.expect_dot()?;
                }
                let name = ns.text.trim_end_matches(':').to_string();
                log::debug!("prefix {name}: <{iri}>");
                self.prefixes.insert(name, iri);
            }
            Production::IriRef | Production::PnameNs => {
                let subject = Term::Iri(self.iri(token)?);
                self.cursor = Cursor::Predicate {
                    subject,
                    continued: false,
                };
            }
            Production::BlankNodeLabel => {
                self.cursor = Cursor::Predicate {
                    subject: Term::BlankNode(token.inner_label()),
                    continued: false,
                };
            }
            _ => return Err(token.unexpected()),
        }
        Ok(())
    }

    fn expect_dot(&mut self) -> Result<(), DocumentError<S::Error>> {
        self.skip_whitespace()?;
        let end = self.lex(Recognizer::TripleEnd)?;
        if end.production == Production::Dot {
            Ok(())
        } else {
            Err(end.unexpected())
        }
    }

    /// Reads an object and the terminator after it.
    fn object(&mut self, token: &Token) -> Result<(Term, Token), DocumentError<S::Error>> {
        let datatype = match token.production {
            Production::IriRef | Production::PnameNs => {
                let object = Term::Iri(self.iri(token)?);
                return Ok((object, self.triple_end()?));
            }
            Production::BlankNodeLabel => {
                let object = Term::BlankNode(token.inner_label());
                return Ok((object, self.triple_end()?));
            }
            Production::Integer => XSD_INTEGER,
            Production::Decimal => XSD_DECIMAL,
            Production::Double => XSD_DOUBLE,
            Production::Boolean => XSD_BOOLEAN,
            Production::StringLiteralQuote
            | Production::StringLiteralSingleQuote
            | Production::StringLiteralLongQuote
            | Production::StringLiteralLongSingleQuote => return self.string_literal(token),
            _ => return Err(token.unexpected()),
        };
        let literal = Literal::typed(token.text.clone(), datatype);
        Ok((Term::Literal(literal), self.triple_end()?))
    }

    fn string_literal(&mut self, token: &Token) -> Result<(Term, Token), DocumentError<S::Error>> {
        let quotes = match token.production {
            Production::StringLiteralLongQuote | Production::StringLiteralLongSingleQuote => 3,
            _ => 1,
        };
        let lexical = unescape_literal(token.inner(quotes)).map_err(|_| {
            DocumentError::InvalidEscape {
                line: token.line,
                column: token.column,
            }
        })?;
        let mut literal = Literal {
            lexical,
            datatype: None,
            language: None,
        };
        self.skip_whitespace()?;
        let suffix = self.lex(Recognizer::LiteralSuffix)?;
        let end = match suffix.production {
            Production::LangTag => {
                literal.language = Some(suffix.text.trim_start_matches('@').to_string());
                self.triple_end()?
            }
            Production::Datatype => {
                self.skip_whitespace()?;
                let datatype = self.lex(Recognizer::DatatypeIri)?;
                literal.datatype = Some(self.iri(&datatype)?);
                self.triple_end()?
            }
            _ => suffix,
        };
        Ok((Term::Literal(literal), end))
    }

    fn triple_end(&mut self) -> Result<Token, DocumentError<S::Error>> {
        self.skip_whitespace()?;
        self.lex(Recognizer::TripleEnd)
    }

    /// Turns an IRI reference or a `prefix:` token into an absolute IRI. A
    /// `prefix:` token reads the local name that follows it.
    fn iri(&mut self, token: &Token) -> Result<String, DocumentError<S::Error>> {
        match token.production {
            Production::IriRef => {
                let iri = unescape_iri(token.inner(1)).map_err(|_| {
                    DocumentError::InvalidEscape {
                        line: token.line,
                        column: token.column,
                    }
                })?;
                self.resolve(iri, token)
            }
            Production::PnameNs => {
                let prefix = token.text.trim_end_matches(':');
                let Some(ns) = self.prefixes.get(prefix).cloned() else {
                    return Err(DocumentError::UnknownPrefix {
                        prefix: prefix.to_string(),
                        line: token.line,
                        column: token.column,
                    });
                };
                let local = self.lex(Recognizer::PnLocal)?;
                Ok(format!("{ns}{}", unescape_local(&local.text)))
            }
            _ => Err(token.unexpected()),
        }
    }

    fn resolve(&self, iri: String, token: &Token) -> Result<String, DocumentError<S::Error>> {
        let Some(base) = &self.base else {
            return Ok(iri);
        };
        match base.resolve(&iri) {
            Ok(resolved) => Ok(resolved.into_inner()),
            Err(e) => Err(DocumentError::InvalidIri {
                iri,
                message: e.to_string(),
                line: token.line,
                column: token.column,
            }),
        }
    }

    /// Skips past the next `.`, unless the failing token was one.
    fn resynchronize(&mut self) {
        self.cursor = Cursor::Statement;
        if self.after_dot {
            return;
        }
        loop {
            match self.scanner.current() {
                None => return,
                Some(cp) => {
                    let dot = cp == u32::from('.');
                    if self.scanner.advance().is_err() {
                        self.cursor = Cursor::Done;
                        return;
                    }
                    if dot {
                        return;
                    }
                }
            }
        }
    }
}

impl<S: ByteSource> Iterator for TurtleParser<S> {
    type Item = Result<Triple, DocumentError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.parse() {
            Ok(Some(triple)) => Some(Ok(triple)),
            Ok(None) => None,
            Err(err) => {
                let (line, column) = err.position();
                if self.recover && err.is_recoverable() {
                    log::warn!("skipping statement after error at {line}:{column}");
                    self.resynchronize();
                } else {
                    self.cursor = Cursor::Done;
                }
                Some(Err(err))
            }
        }
    }
}

impl<S: ByteSource> core::iter::FusedIterator for TurtleParser<S> {}
