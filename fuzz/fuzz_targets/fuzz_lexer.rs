#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lupos_turtle::{
    ByteSource, ChunkSource, IriMode, LexerOptions, Recognizer, Scanner, TextEncoding, Utf8Mode,
};

#[derive(Debug, Arbitrary)]
struct Input {
    strict_utf8: bool,
    strict_iri: bool,
    utf8_text: bool,
    buffer_size: u8,
    /// Recognizer to run at each step, by index into `Recognizer::ALL`.
    plan: Vec<u8>,
    splits: Vec<u8>,
    data: Vec<u8>,
}

/// Runs `plan` over the source and records every outcome as a string.
fn trace<S: ByteSource>(source: S, options: LexerOptions, plan: &[u8]) -> Vec<String>
where
    S::Error: std::fmt::Debug,
{
    let mut out = Vec::new();
    let mut scanner = match Scanner::with_options(source, options) {
        Ok(scanner) => scanner,
        Err(err) => return vec![format!("{err:?}")],
    };
    for &index in plan {
        let recognizer = Recognizer::ALL[usize::from(index) % Recognizer::ALL.len()];
        match scanner.recognize(recognizer) {
            Ok(lexeme) => out.push(format!(
                "{:?} {}:{} {}",
                lexeme.production,
                lexeme.line,
                lexeme.column,
                lexeme.text.to_string_lossy()
            )),
            Err(err) => {
                out.push(format!("{err:?}"));
                if err.is_premature_end() {
                    break;
                }
                // Step over the offending code point and keep going.
                if scanner.advance().is_err() {
                    break;
                }
            }
        }
    }
    out
}

fn split<'a>(data: &'a [u8], splits: &[u8]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = data;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + usize::from(s) % rest.len());
        chunks.push(head);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

fuzz_target!(|input: Input| {
    let options = LexerOptions {
        utf8: if input.strict_utf8 { Utf8Mode::Strict } else { Utf8Mode::Permissive },
        iri: if input.strict_iri { IriMode::Strict } else { IriMode::Permissive },
        text_encoding: if input.utf8_text { TextEncoding::Utf8 } else { TextEncoding::Utf16 },
        ..LexerOptions::default()
    };
    let whole = trace(&input.data[..], options, &input.plan);
    let chunked = trace(
        ChunkSource::new(split(&input.data, &input.splits)),
        LexerOptions {
            buffer_size: 1 + usize::from(input.buffer_size),
            ..options
        },
        &input.plan,
    );
    assert_eq!(whole, chunked);
});
