use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::Palette;

/// Single-line message input with cursor handling and horizontal scrolling.
///
/// The cursor is a character index, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of character index `index`.
    fn byte_index(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert a string at the cursor (bracketed paste). Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Move cursor one position to the left
    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor one position to the right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    /// Move cursor to the beginning of the text
    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to the end of the text
    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    /// Get the current text content
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text content and move the cursor to the end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor_position = self.len();
    }

    /// Clear all content and reset cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Check if the input box is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// First visible character so the cursor stays inside `visible_width` columns.
    fn scroll_offset(&self, visible_width: usize) -> usize {
        if visible_width == 0 {
            return 0;
        }
        let chars: Vec<char> = self.content.chars().collect();
        let mut start = self.cursor_position.min(chars.len());
        // The cursor block covers the character under it, or one blank column
        let mut used = chars
            .get(start)
            .and_then(|c| c.width())
            .unwrap_or(1)
            .max(1);
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if used + w > visible_width {
                break;
            }
            used += w;
            start -= 1;
        }
        start
    }

    /// Render the input box.
    ///
    /// A disabled box is drawn dimmed with no cursor; its draft is kept.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        enabled: bool,
        palette: &Palette,
    ) {
        let border_color = if enabled {
            palette.accent
        } else {
            palette.dim
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.input_bg))
            .title(title);
        block.render(area, buf);

        let inner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: if area.height > 2 { 1 } else { 0 },
        };
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let inner_width = inner_area.width as usize;
        let scroll_offset = self.scroll_offset(inner_width);
        let text_style = if enabled {
            Style::default().fg(palette.text).bg(palette.input_bg)
        } else {
            Style::default().fg(palette.dim).bg(palette.input_bg)
        };

        let mut x = 0usize;
        let mut cursor_x = None;
        for (i, c) in self.content.chars().enumerate().skip(scroll_offset) {
            let w = c.width().unwrap_or(0);
            if x + w > inner_width {
                break;
            }
            if i == self.cursor_position {
                cursor_x = Some(x);
            }
            buf.set_string(inner_area.x + x as u16, inner_area.y, c.to_string(), text_style);
            x += w;
        }
        if self.cursor_position >= self.len() && x < inner_width {
            cursor_x = Some(x);
        }

        if !enabled {
            return;
        }
        if let Some(cx) = cursor_x {
            let cursor_char = self
                .content
                .chars()
                .nth(self.cursor_position)
                .unwrap_or(' ');
            let cursor_style = Style::default().fg(palette.input_bg).bg(palette.accent);
            buf.set_string(
                inner_area.x + cx as u16,
                inner_area.y,
                cursor_char.to_string(),
                cursor_style,
            );
        }
    }
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    enabled: bool,
    palette: &'a Palette,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, enabled: bool, palette: &'a Palette) -> Self {
        Self {
            input_box,
            title,
            enabled,
            palette,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.enabled, self.palette);
    }
}
