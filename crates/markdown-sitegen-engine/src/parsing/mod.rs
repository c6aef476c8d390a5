//! # Markdown Parsing
//!
//! Two independent halves feed the HTML tree builder:
//!
//! - **`blocks`**: splits a document into blank-line-delimited blocks and
//!   classifies each one from its line prefixes alone
//! - **`inline`**: turns the text of a block (or list item) into typed spans
//!
//! Neither half looks at the other. Classification never needs the
//! neighbouring blocks, and inline tokenization never needs the block kind.

pub mod blocks;
pub mod inline;

use blocks::{Block, classify, split_blocks};

/// Errors raised while tokenizing inline content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid Markdown syntax: unmatched delimiter `{delimiter}` in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// Splits and classifies a document into its ordered blocks.
pub fn parse_document(markdown: &str) -> Vec<Block> {
    split_blocks(markdown)
        .into_iter()
        .map(|text| {
            let kind = classify(&text);
            log::debug!("classified block as {kind:?}");
            Block { text, kind }
        })
        .collect()
}
