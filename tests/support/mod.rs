#![allow(dead_code)]

use cfg_ll1::{Analysis, Consumed, GrammarDefinition, ParseError, Parser};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn analyze(definition: &GrammarDefinition) -> Analysis {
    init_logging();
    match Analysis::new(definition) {
        Ok(analysis) => analysis,
        Err(error) => panic!("analysis failed: {}", error),
    }
}

/// Feeds whitespace-separated lexemes, then the end of input. Returns the outcome
/// of the last call, or the first error.
pub fn feed_all(parser: &mut Parser, input: &str) -> Result<Consumed, ParseError> {
    for lexeme in input.split_whitespace() {
        parser.feed(Some(lexeme))?;
    }
    parser.feed(None)
}
