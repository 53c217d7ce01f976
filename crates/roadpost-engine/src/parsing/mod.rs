pub mod builder;
pub mod classify;
pub mod serialize;
pub mod types;

use builder::BlockBuilder;
use classify::LineClassifier;
use types::Block;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Parses pre-split content lines into blocks.
///
/// Total and pure: any sequence of lines yields a block sequence, empty
/// input yields empty output, and the same input always yields the same
/// output. All parse state lives in the builder for this one call.
pub fn parse(lines: &[String]) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Splits a raw content blob on newlines and parses it.
///
/// A trailing `\r` left behind by splitting CRLF text on `'\n'` is
/// stripped here so the classifier always sees exact line text.
pub fn parse_text(text: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Convenience wrapper returning a [`ParsedDoc`].
pub fn parse_document(text: &str) -> ParsedDoc {
    ParsedDoc {
        blocks: parse_text(text),
    }
}
