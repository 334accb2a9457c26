use alloc::{format, string::String, vec::Vec};
use core::fmt::Debug;

use crate::{ByteSource, LexError, Lexeme, LexerOptions, Production, Recognizer, Scanner};

pub(crate) fn render(lexeme: &Lexeme<'_>) -> String {
    format!(
        "{}:{} {:?} {}",
        lexeme.line, lexeme.column, lexeme.production, lexeme.text
    )
}

pub(crate) fn render_err<E: Debug>(err: &LexError<E>) -> String {
    format!("{}:{} error {:?}", err.line(), err.column(), err.kind())
}

/// Lexes a whole document, choosing each recognizer from the lookahead.
///
/// Whitespace runs are skipped and not rendered. Lexing stops at the first
/// error, which is rendered as the last line.
pub(crate) fn tokenize<S>(source: S, options: LexerOptions) -> Vec<String>
where
    S: ByteSource,
    S::Error: Debug,
{
    let mut out = Vec::new();
    let mut scanner = match Scanner::with_options(source, options) {
        Ok(scanner) => scanner,
        Err(err) => {
            out.push(render_err(&err));
            return out;
        }
    };
    let mut statement_start = true;
    loop {
        if let Err(err) = scanner.whitespace() {
            out.push(render_err(&err));
            return out;
        }
        let Some(cp) = scanner.current() else {
            return out;
        };
        let recognizer = if statement_start {
            Recognizer::Statement
        } else {
            match char::from_u32(cp) {
                Some('<') => Recognizer::IriRef,
                Some('_') => Recognizer::BlankNodeLabel,
                Some('"' | '\'') => Recognizer::StringLiteral,
                Some('+' | '-' | '0'..='9') => Recognizer::Numeric,
                Some('@' | '^') => Recognizer::LiteralSuffix,
                Some(';' | ',' | '.') => Recognizer::TripleEnd,
                Some('t' | 'f') => Recognizer::Object,
                _ => Recognizer::Predicate,
            }
        };
        let production = match scanner.recognize(recognizer) {
            Ok(lexeme) => {
                out.push(render(&lexeme));
                lexeme.production
            }
            Err(err) => {
                out.push(render_err(&err));
                return out;
            }
        };
        statement_start = production == Production::Dot;
        if production == Production::PnameNs {
            match scanner.pn_local() {
                Ok(local) => out.push(render(&local)),
                Err(err) => {
                    out.push(render_err(&err));
                    return out;
                }
            }
        }
    }
}

/// Runs one recognizer over `input` and renders the lexeme (or error),
/// followed by the lookahead left behind.
pub(crate) fn recognize_one(input: &str, recognizer: Recognizer, options: LexerOptions) -> String {
    let mut scanner = match Scanner::with_options(input.as_bytes(), options) {
        Ok(scanner) => scanner,
        Err(err) => return render_err(&err),
    };
    let rendered = match scanner.recognize(recognizer) {
        Ok(lexeme) => render(&lexeme),
        Err(err) => return render_err(&err),
    };
    match scanner.current().and_then(char::from_u32) {
        Some(next) => format!("{rendered} | {next:?} at {}:{}", scanner.line(), scanner.column()),
        None => format!("{rendered} | end"),
    }
}

/// Splits `bytes` into chunks whose sizes are derived from `splits`.
pub(crate) fn chunk_bytes<'a>(bytes: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = bytes;
    for &split in splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + split % rest.len();
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
