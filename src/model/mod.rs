//! Layout-node model for parsed documents.
//!
//! This module defines the intermediate representation (IR) that bridges
//! the markdown-subset parser and the PDF rendering glue. The model is
//! renderer-agnostic: every node carries fully resolved text, and the
//! rendering layer only has to map nodes onto layout elements.

mod document;
mod node;
mod span;
mod table;

pub use document::Document;
pub use node::{LayoutNode, ListBlock};
pub use span::{InlineSpan, TextRun};
pub use table::TableBlock;
