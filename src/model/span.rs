//! Inline span types.

use serde::{Deserialize, Serialize};

/// A line of text that has passed through the inline transformer.
///
/// Emphasis markers are resolved into minimal `<b>…</b>` / `<i>…</i>`
/// markup; unmatched markers remain literal characters. The renderer
/// consumes the markup through [`InlineSpan::runs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineSpan(String);

impl InlineSpan {
    /// Create a span from already-transformed markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The raw markup string.
    pub fn as_markup(&self) -> &str {
        &self.0
    }

    /// Text content with all emphasis tags stripped.
    pub fn plain_text(&self) -> String {
        self.0
            .replace("<b>", "")
            .replace("</b>", "")
            .replace("<i>", "")
            .replace("</i>", "")
    }

    /// Check if the span contains no text.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Split the markup into styled text runs.
    ///
    /// Opening tags set the corresponding flag, closing tags clear it.
    /// Tags may arrive interleaved (the transformer's bold-before-italic
    /// pass order can produce `<b><i>x</b></i>` for inputs like `***x***`);
    /// the toggle treats every tag independently, so such spans still
    /// yield usable runs.
    pub fn runs(&self) -> Vec<TextRun> {
        let mut runs = Vec::new();
        let mut buf = String::new();
        let mut bold = false;
        let mut italic = false;
        let mut rest = self.0.as_str();

        while !rest.is_empty() {
            match rest.find('<') {
                Some(0) => {
                    if let Some(tail) = rest.strip_prefix("<b>") {
                        flush(&mut runs, &mut buf, bold, italic);
                        bold = true;
                        rest = tail;
                    } else if let Some(tail) = rest.strip_prefix("</b>") {
                        flush(&mut runs, &mut buf, bold, italic);
                        bold = false;
                        rest = tail;
                    } else if let Some(tail) = rest.strip_prefix("<i>") {
                        flush(&mut runs, &mut buf, bold, italic);
                        italic = true;
                        rest = tail;
                    } else if let Some(tail) = rest.strip_prefix("</i>") {
                        flush(&mut runs, &mut buf, bold, italic);
                        italic = false;
                        rest = tail;
                    } else {
                        // Literal '<' that does not open a known tag.
                        buf.push('<');
                        rest = &rest[1..];
                    }
                }
                Some(i) => {
                    buf.push_str(&rest[..i]);
                    rest = &rest[i..];
                }
                None => {
                    buf.push_str(rest);
                    rest = "";
                }
            }
        }
        flush(&mut runs, &mut buf, bold, italic);

        runs
    }
}

impl From<&str> for InlineSpan {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for InlineSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn flush(runs: &mut Vec<TextRun>, buf: &mut String, bold: bool, italic: bool) {
    if !buf.is_empty() {
        runs.push(TextRun {
            text: std::mem::take(buf),
            bold,
            italic,
        });
    }
}

/// A run of text with consistent emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold emphasis
    pub bold: bool,

    /// Italic emphasis
    pub italic: bool,
}

impl TextRun {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Check if any emphasis is applied.
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic
    }
}
