use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-formed markup that is emitted verbatim.
///
/// Holding an `HtmlFragment` means the content has already been escaped or
/// is trusted. Nothing downstream escapes it again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Builds a fragment from plain text by escaping it.
    pub fn from_text(text: &str) -> Self {
        Self(escape_text(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Input accepted for a summary: plain text to be escaped, or rich markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryContent {
    Text(String),
    Html(HtmlFragment),
}

impl From<&str> for SummaryContent {
    fn from(text: &str) -> Self {
        SummaryContent::Text(text.to_string())
    }
}

impl From<String> for SummaryContent {
    fn from(text: String) -> Self {
        SummaryContent::Text(text)
    }
}

impl From<HtmlFragment> for SummaryContent {
    fn from(html: HtmlFragment) -> Self {
        SummaryContent::Html(html)
    }
}
