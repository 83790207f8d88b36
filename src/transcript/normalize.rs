//! Text normalization for transcript entries.
//!
//! Agent replies get exactly two rewrites: `**X**` becomes an emphasized
//! fragment and each line break (`\n`, `\r\n` or a lone `\r`) becomes a
//! new line. No other Markdown is recognized, and an unmatched `**` is left
//! as literal text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Non-greedy bold span. `.` does not cross a line break.
static BOLD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex pattern"));

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub emphasized: bool,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Display form of an entry: lines of styled fragments.
///
/// An empty line is an empty fragment list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    pub lines: Vec<Vec<Fragment>>,
}

impl NormalizedText {
    /// Each line with styling dropped.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|f| f.text.as_str()).collect())
            .collect()
    }

    /// Text of every emphasized fragment, in order.
    pub fn emphasized_text(&self) -> Vec<&str> {
        self.lines
            .iter()
            .flatten()
            .filter(|f| f.emphasized)
            .map(|f| f.text.as_str())
            .collect()
    }
}

/// Accumulates fragments, starting a new line at every `\n`.
struct LineBuilder {
    lines: Vec<Vec<Fragment>>,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    fn push(&mut self, text: &str, emphasized: bool) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.lines.push(Vec::new());
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = self.lines.last_mut() {
                line.push(Fragment {
                    text: part.to_string(),
                    emphasized,
                });
            }
        }
    }

    fn finish(self) -> NormalizedText {
        NormalizedText { lines: self.lines }
    }
}

/// Every break style as `\n`.
fn unify_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize agent-authored text: bold spans and line breaks.
pub fn normalize_agent_text(text: &str) -> NormalizedText {
    let text = unify_breaks(text);
    let mut builder = LineBuilder::new();
    let mut last = 0;

    for caps in BOLD_REGEX.captures_iter(&text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        builder.push(&text[last..whole.start()], false);
        builder.push(inner.as_str(), true);
        last = whole.end();
    }
    builder.push(&text[last..], false);

    builder.finish()
}

/// User text is shown literally; only line breaks are honored.
pub fn normalize_user_text(text: &str) -> NormalizedText {
    let mut builder = LineBuilder::new();
    builder.push(&unify_breaks(text), false);
    builder.finish()
}
