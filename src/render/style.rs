//! Style sheet for rendered reports.

use std::path::PathBuf;

/// Fixed visual configuration for one render pass.
///
/// All style constants live here and are passed explicitly into the
/// rendering step; nothing is recreated ad hoc per conversion.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// Directory holding the TTF font family (regular, bold, italic,
    /// bold-italic variants)
    pub font_dir: PathBuf,

    /// Font family base name, e.g. `LiberationSans`
    pub font_family: String,

    /// Body text size in points
    pub body_size: u8,

    /// Heading sizes in points, indexed by level 1-6
    pub heading_sizes: [u8; 6],

    /// Cover page title size in points
    pub cover_title_size: u8,

    /// Line spacing multiplier
    pub line_spacing: f64,

    /// Page margins in millimeters on all sides (25.4 mm = 72 pt)
    pub margin_mm: f64,

    /// Vertical space after each content block, in lines
    pub block_spacing: f64,

    /// Table header text color as RGB; the header row is always bold
    pub table_header_color: Option<(u8, u8, u8)>,
}

impl StyleSheet {
    /// Flat sizing: level 1 is large, every deeper level shares one
    /// subtitle size.
    pub fn flat() -> Self {
        Self {
            heading_sizes: [24, 18, 18, 18, 18, 18],
            ..Self::base()
        }
    }

    /// Graded sizing: heading size decreases with each level.
    pub fn graded() -> Self {
        Self {
            heading_sizes: [24, 20, 18, 16, 14, 12],
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            font_dir: PathBuf::from("assets/fonts"),
            font_family: "LiberationSans".to_string(),
            body_size: 10,
            heading_sizes: [24, 18, 18, 18, 18, 18],
            cover_title_size: 28,
            line_spacing: 1.2,
            margin_mm: 25.4,
            block_spacing: 1.0,
            table_header_color: None,
        }
    }

    /// Set the font directory.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into();
        self
    }

    /// Set the font family base name.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Heading size in points for a level, clamped to 1-6.
    pub fn heading_size(&self, level: u8) -> u8 {
        self.heading_sizes[(level.clamp(1, 6) - 1) as usize]
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::flat()
    }
}
