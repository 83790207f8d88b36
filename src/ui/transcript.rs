//! Transcript pane rendering.
//!
//! Entries are pre-wrapped to the pane width so the bottom pin counts
//! visual lines, not logical ones.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{Sender, TranscriptEntry};
use crate::transcript::{Transcript, TranscriptRow};

use super::theme::Palette;

/// Indent applied to every body line under a sender label.
pub const BODY_PREFIX: &str = "  ";

/// Typing indicator dot.
pub const TYPING_DOT: &str = "●";

/// Pre-wraps styled text, prefixing every visual line.
struct LineWrapper {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    width: usize,
    content_width: usize,
    prefix: &'static str,
    prefix_style: Style,
}

impl LineWrapper {
    fn new(max_width: usize, prefix: &'static str, prefix_style: Style) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            width: 0,
            // Always leave room for at least one character
            content_width: max_width.saturating_sub(prefix.width()).max(1),
            prefix,
            prefix_style,
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        match self.current.last_mut() {
            Some(last) if last.style == style => {
                last.content = format!("{}{}", last.content, text).into();
            }
            _ => self.current.push(Span::styled(text.to_string(), style)),
        }
    }

    /// Finish the current visual line.
    fn break_line(&mut self) {
        let mut spans = vec![Span::styled(self.prefix, self.prefix_style)];
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
        self.width = 0;
    }

    /// Append text, wrapping at spaces and hard-splitting words wider than
    /// the pane.
    fn push_str(&mut self, text: &str, style: Style) {
        for token in text.split_inclusive(' ') {
            let fit_width = token.trim_end_matches(' ').width();

            if self.width + fit_width <= self.content_width {
                self.push_span(token, style);
                self.width += token.width();
            } else if fit_width <= self.content_width {
                self.break_line();
                self.push_span(token, style);
                self.width = token.width();
            } else {
                for c in token.chars() {
                    let w = c.width().unwrap_or(0);
                    if self.width + w > self.content_width && self.width > 0 {
                        self.break_line();
                    }
                    let mut buf = [0u8; 4];
                    self.push_span(c.encode_utf8(&mut buf), style);
                    self.width += w;
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.break_line();
        self.lines
    }
}

/// Wrap one logical line of `(text, style)` runs to `max_width` columns.
pub fn wrap_styled_line(
    runs: &[(String, Style)],
    prefix: &'static str,
    prefix_style: Style,
    max_width: usize,
) -> Vec<Line<'static>> {
    let mut wrapper = LineWrapper::new(max_width, prefix, prefix_style);
    for (text, style) in runs {
        wrapper.push_str(text, *style);
    }
    wrapper.finish()
}

fn label_line(sender: Sender, palette: &Palette) -> Line<'static> {
    let color = match sender {
        Sender::User => palette.user_label,
        Sender::Agent => palette.agent_label,
    };
    Line::from(Span::styled(
        sender.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Visual lines for one entry: label, wrapped body, trailing blank line.
pub fn entry_lines(entry: &TranscriptEntry, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(palette.text);
    let emphasis_style = Style::default()
        .fg(palette.emphasis)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![label_line(entry.sender, palette)];
    for line in &entry.body.lines {
        let runs: Vec<(String, Style)> = line
            .iter()
            .map(|fragment| {
                let style = if fragment.emphasized {
                    emphasis_style
                } else {
                    text_style
                };
                (fragment.text.clone(), style)
            })
            .collect();
        lines.extend(wrap_styled_line(&runs, BODY_PREFIX, text_style, width));
    }
    lines.push(Line::default());
    lines
}

/// Visual lines for the typing placeholder: an agent label and three dots,
/// with dot `frame` highlighted.
pub fn placeholder_lines(frame: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut dots = vec![Span::raw(BODY_PREFIX)];
    for i in 0..3 {
        let color = if i == frame % 3 {
            palette.accent
        } else {
            palette.dim
        };
        if i > 0 {
            dots.push(Span::raw(" "));
        }
        dots.push(Span::styled(TYPING_DOT, Style::default().fg(color)));
    }
    vec![label_line(Sender::Agent, palette), Line::from(dots), Line::default()]
}

/// All visual lines of the transcript at `width` columns.
pub fn build_transcript_lines(
    transcript: &Transcript,
    width: usize,
    palette: &Palette,
    typing_frame: usize,
) -> Vec<Line<'static>> {
    transcript
        .rows()
        .iter()
        .flat_map(|row| match row {
            TranscriptRow::Entry(entry) => entry_lines(entry, width, palette),
            TranscriptRow::Placeholder(_) => placeholder_lines(typing_frame, palette),
        })
        .collect()
}

/// Render the transcript pane, bottom-anchored unless the reader scrolled up.
pub fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    transcript: &mut Transcript,
    palette: &Palette,
    typing_frame: usize,
) {
    let scrolled = !transcript.scroll().is_pinned();
    let title = if scrolled { " Chat ↑ " } else { " Chat " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(Span::styled(title, Style::default().fg(palette.text)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = build_transcript_lines(transcript, inner.width as usize, palette, typing_frame);
    let height = inner.height as usize;
    let first = transcript
        .scroll_mut()
        .first_visible_line(lines.len(), height);

    let visible: Vec<Line<'static>> = lines.into_iter().skip(first).take(height).collect();
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(palette.background)),
        inner,
    );
}
