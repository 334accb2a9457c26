//! A streaming, code-point driven lexer for RDF Turtle.
//!
//! The [`Scanner`] decodes UTF-8 from any [`ByteSource`] one code point at a
//! time, tracks lines and columns, and runs table-driven recognizers for the
//! Turtle productions: IRI references, prefixed names, blank node labels,
//! the four string forms, numbers, booleans, language tags, directive
//! keywords and punctuation. Each call yields one [`Lexeme`] or one
//! [`LexError`].
//!
//! With the `document` feature, [`TurtleParser`] composes the recognizers
//! into a statement loop that yields [`Triple`]s.
//!
//! ```rust
//! use lupos_turtle::{Production, Scanner};
//!
//! let mut scanner = Scanner::new(&b"123.45e6 ;"[..]).unwrap();
//! let number = scanner.numeric_literal().unwrap();
//! assert_eq!(number.production, Production::Double);
//! assert_eq!(number.text, "123.45e6");
//! scanner.whitespace().unwrap();
//! assert_eq!(scanner.triple_end().unwrap().production, Production::PredicateList);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod capture;
mod decoder;
mod error;
mod lexer;
mod options;
mod source;

#[cfg(feature = "document")]
mod document;

#[cfg(test)]
mod tests;

pub use capture::Capture;
#[cfg(feature = "document")]
pub use document::{
    DocumentError, Literal, RDF_TYPE, Term, Triple, TurtleOptions, TurtleParser, XSD_BOOLEAN,
    XSD_DECIMAL, XSD_DOUBLE, XSD_INTEGER,
};
pub use error::{ErrorKind, LexError};
pub use lexer::{Lexeme, Production, Recognizer, Scanner};
pub use options::{DEFAULT_BUFFER_SIZE, IriMode, LexerOptions, TextEncoding, Utf8Mode};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, ChunkSource};
