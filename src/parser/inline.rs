//! Inline emphasis transformer.

use crate::model::InlineSpan;
use regex::Regex;

/// Rewrites paired emphasis markers into minimal markup.
///
/// Bold (`**text**`, `__text__`) is always resolved; italic (`*text*`,
/// `_text_`) only when enabled. Matching is non-greedy, and all bold
/// substitutions run before any italic scan, so a bold span's content is
/// never re-read as two adjacent italic markers. Unmatched single markers
/// stay in the output as literal characters.
///
/// Because bold is fully resolved first, the italic scan can pair a
/// leftover marker with one inside already-substituted markup: `***x***`
/// becomes `<b><i>x</b></i>`. That ordering artifact is kept as observable
/// behavior; [`InlineSpan::runs`] renders it without trouble.
pub struct InlineTransformer {
    bold_star: Regex,
    bold_under: Regex,
    italic_star: Regex,
    italic_under: Regex,
    enable_italic: bool,
}

impl InlineTransformer {
    /// Create a transformer.
    pub fn new(enable_italic: bool) -> Self {
        Self {
            bold_star: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            bold_under: Regex::new(r"__(.*?)__").unwrap(),
            italic_star: Regex::new(r"\*(.*?)\*").unwrap(),
            italic_under: Regex::new(r"_(.*?)_").unwrap(),
            enable_italic,
        }
    }

    /// Rewrite emphasis markers in one line of raw text.
    pub fn transform(&self, text: &str) -> InlineSpan {
        let pass = self.bold_star.replace_all(text, "<b>$1</b>");
        let pass = self.bold_under.replace_all(&pass, "<b>$1</b>");

        let resolved = if self.enable_italic {
            let pass = self.italic_star.replace_all(&pass, "<i>$1</i>");
            self.italic_under
                .replace_all(&pass, "<i>$1</i>")
                .into_owned()
        } else {
            pass.into_owned()
        };

        InlineSpan::new(resolved)
    }
}

impl Default for InlineTransformer {
    fn default() -> Self {
        Self::new(true)
    }
}
