//! Rendering module: layout nodes to PDF via the genpdf engine.
//!
//! The renderer is deliberately thin glue. Page layout, line wrapping,
//! and overflow pagination are the engine's job; this module only maps
//! layout nodes onto engine elements and applies the style sheet.

mod json;
mod options;
mod pdf;
mod style;

pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, TableAlignment};
pub use pdf::{render_to_file, render_to_writer};
pub use style::StyleSheet;
