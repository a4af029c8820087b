//! Parsing options.

/// Options controlling the block parser and inline transformer.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Resolve `*text*` / `_text_` italic emphasis.
    ///
    /// Bold emphasis is always resolved. With italics disabled, single
    /// markers pass through as literal characters.
    pub enable_italic: bool,

    /// Emit a page break before each level-1 heading.
    ///
    /// The break is suppressed when nothing precedes the heading, so a
    /// document that opens with its title never starts on a blank page.
    pub break_before_h1: bool,
}

impl ParseOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable italic emphasis.
    pub fn with_italic(mut self, enable: bool) -> Self {
        self.enable_italic = enable;
        self
    }

    /// Enable or disable page breaks before level-1 headings.
    pub fn with_section_breaks(mut self, enable: bool) -> Self {
        self.break_before_h1 = enable;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            enable_italic: true,
            break_before_h1: false,
        }
    }
}
