//! Markdown-subset parsing.
//!
//! The parser makes one left-to-right pass over the input lines, grouping
//! contiguous lines into typed blocks and emitting one layout node per
//! block. Parsing never fails: malformed constructs degrade to paragraphs
//! or are dropped, per block.

mod block;
mod inline;
mod line;
mod options;

pub use block::BlockParser;
pub use inline::InlineTransformer;
pub use line::LineClass;
pub use options::ParseOptions;

use crate::model::Document;

/// Parse input text with default options.
pub fn parse(input: &str) -> Document {
    BlockParser::new(ParseOptions::default()).parse(input)
}

/// Parse input text with custom options.
pub fn parse_with_options(input: &str, options: ParseOptions) -> Document {
    BlockParser::new(options).parse(input)
}
