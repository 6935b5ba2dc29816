pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod lines;

use crate::{error::ParseError, tree::Tree};

use blocks::{BlockBuilder, MarkdownLineClassifier};
use lines::lines;

/// Parses a whole document into an element tree.
///
/// Fails on the first malformed line; no partial tree is returned.
pub fn parse_document(input: &str) -> Result<Tree, ParseError> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines(input) {
        let class = classifier.classify(&lr)?;
        log::debug!("line {}: {:?}", lr.number, class);
        builder.push(class);
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests;
