#![expect(missing_docs)]

use std::io::{self, Cursor, Read};

use lupos_turtle::{
    ErrorKind, IoSource, LexError, LexerOptions, Production, Recognizer, Scanner, Utf8Mode,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A reader that is interrupted before every successful read.
struct Stuttering<R> {
    inner: R,
    interrupt: bool,
}

impl<R: Read> Read for Stuttering<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let len = buf.len().min(3);
        self.inner.read(&mut buf[..len])
    }
}

#[test]
fn directive_over_io_source() {
    init_logging();
    let reader = Stuttering {
        inner: Cursor::new("@prefix ex: <http://example.org/> .\n"),
        interrupt: false,
    };
    let mut scanner = Scanner::new(IoSource::new(reader)).unwrap();

    let keyword = scanner.statement().unwrap();
    assert_eq!(keyword.production, Production::Prefix);
    scanner.whitespace().unwrap();
    let ns = scanner.pname_ns().unwrap();
    assert_eq!((ns.production, ns.text.to_string_lossy()), (Production::PnameNs, "ex:".into()));
    scanner.whitespace().unwrap();
    let iri = scanner.iri_ref().unwrap();
    assert_eq!(iri.text, "<http://example.org/>");
    assert_eq!((iri.line, iri.column), (1, 13));
    scanner.whitespace().unwrap();
    assert_eq!(scanner.triple_end().unwrap().production, Production::Dot);
    scanner.whitespace().unwrap();
    assert!(scanner.is_at_end());
    assert_eq!((scanner.line(), scanner.column()), (2, 1));
}

#[test]
fn io_errors_are_passed_through() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("unplugged"))
        }
    }

    let err = Scanner::new(IoSource::new(Broken)).err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::Source(e) if e.to_string() == "unplugged"));
    assert_eq!(err.to_string(), "byte source error: unplugged at 1:1");
}

#[test]
fn error_display() {
    let mut scanner = Scanner::new(&b"@prefxi"[..]).unwrap();
    let err: LexError = scanner.statement().unwrap_err();
    assert_eq!(err.to_string(), "unexpected character U+0078 at 1:6");

    let mut scanner = Scanner::new(&b"'abc"[..]).unwrap();
    let err = scanner.recognize(Recognizer::StringLiteral).unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of stream at 1:5");
}

#[test]
fn strict_utf8_error_display() {
    let options = LexerOptions {
        utf8: Utf8Mode::Strict,
        ..LexerOptions::default()
    };
    let mut scanner = Scanner::with_options(&b"'\xFF'"[..], options).unwrap();
    let err = scanner.string_literal().unwrap_err();
    assert_eq!(err.to_string(), "invalid UTF-8 sequence at 1:2");
}

#[test]
fn every_recognizer_yields_one_outcome() {
    init_logging();
    let inputs = ["", "x", ".", "<a>", "\"s\"", "12", "_:b", "@en", "a", "true", " "];
    for input in inputs {
        for recognizer in Recognizer::ALL {
            let mut scanner = Scanner::new(input.as_bytes()).unwrap();
            let before = (scanner.line(), scanner.column());
            match scanner.recognize(recognizer) {
                Ok(lexeme) => assert_eq!((lexeme.line, lexeme.column), before),
                Err(err) => assert!(
                    err.code_point().is_some() || err.is_premature_end(),
                    "{recognizer:?} on {input:?}: {err}"
                ),
            }
        }
    }
}
