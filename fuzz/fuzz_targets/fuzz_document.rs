#![no_main]

use libfuzzer_sys::fuzz_target;
use lupos_turtle::{ChunkSource, TurtleOptions, TurtleParser};

fuzz_target!(|data: &[u8]| {
    let Some((&chunk, data)) = data.split_first() else {
        return;
    };
    let options = TurtleOptions {
        recover_statements: true,
        ..TurtleOptions::default()
    };

    let whole: Vec<String> = match TurtleParser::new(data, options.clone()) {
        Ok(parser) => parser
            .map(|item| match item {
                Ok(triple) => triple.to_string(),
                Err(err) => err.to_string(),
            })
            .collect(),
        Err(err) => vec![err.to_string()],
    };

    let chunks = data.chunks(1 + usize::from(chunk));
    let chunked: Vec<String> = match TurtleParser::new(ChunkSource::new(chunks), options) {
        Ok(parser) => parser
            .map(|item| match item {
                Ok(triple) => triple.to_string(),
                Err(err) => err.to_string(),
            })
            .collect(),
        Err(err) => vec![err.to_string()],
    };

    assert_eq!(whole, chunked);
});
