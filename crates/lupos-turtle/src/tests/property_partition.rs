use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::utils::{chunk_bytes, tokenize};
use crate::{ChunkSource, LexerOptions, Utf8Mode};

const CORPUS: &[&str] = &[
    "@prefix ex: <http://example.org/> .\nex:s ex:p ex:o .\n",
    "PREFIX : <urn:x#>\nBASE <http://b/>\n:a a :C ; :p \"x\"@en-GB , 'y'^^:t .",
    "_:b1 <p> 1.5e-3 , -42 , .5 , 7. \n",
    "ex:caf\u{e9} ex:p \"\"\"multi\nline \u{1f600} \"quoted\" \"\"\" .",
    "# comment \u{2603}\r\n<s> <p> true , false , truex:y .\r\n",
    "ex:a\\.b ex:p%20q ex:o.x. _:n.m ex:p 'it\\'s' .",
    "<s> <p> \"unterminated",
    "@prefix bad <x> .",
    "<s> <p> \"\\u00E9\\U0001F600\" ; <q> '''''' .",
];

/// Property: splitting the input into arbitrary chunks, and reading it
/// through arbitrarily small buffers, never changes the token stream.
#[test]
fn partition_token_stream_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(index: usize, splits: Vec<usize>, buffer: u8, strict: bool) -> bool {
        let input = CORPUS[index % CORPUS.len()].as_bytes();
        let utf8 = if strict {
            Utf8Mode::Strict
        } else {
            Utf8Mode::Permissive
        };
        let whole = tokenize(
            input,
            LexerOptions {
                utf8,
                ..LexerOptions::default()
            },
        );
        let chunked = tokenize(
            ChunkSource::new(chunk_bytes(input, &splits)),
            LexerOptions {
                buffer_size: 1 + usize::from(buffer % 16),
                utf8,
                ..LexerOptions::default()
            },
        );
        whole == chunked
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(usize, Vec<usize>, u8, bool) -> bool);
}

#[test]
fn corpus_tokenizes_identically_byte_by_byte() {
    for input in CORPUS {
        let bytes = input.as_bytes();
        let singles: Vec<&[u8]> = bytes.chunks(1).collect();
        assert_eq!(
            tokenize(ChunkSource::new(singles), LexerOptions::default()),
            tokenize(bytes, LexerOptions::default()),
            "input: {input:?}"
        );
    }
}
