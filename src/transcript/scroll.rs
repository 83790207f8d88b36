//! Bottom-anchored scroll state for the transcript pane.

/// Scroll position measured in visual lines up from the newest entry.
///
/// Offset 0 means pinned to the bottom. The transcript resets to 0 after
/// every structural change, so a reader who scrolled up is brought back
/// to the latest turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset_from_bottom: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin_to_bottom(&mut self) {
        self.offset_from_bottom = 0;
    }

    pub fn is_pinned(&self) -> bool {
        self.offset_from_bottom == 0
    }

    pub fn offset_from_bottom(&self) -> usize {
        self.offset_from_bottom
    }

    /// Scroll toward older entries. Clamped at render time.
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_add(lines);
    }

    /// Scroll toward newer entries.
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_sub(lines);
    }

    /// First visible line for `total` content lines in a `height`-line viewport.
    ///
    /// Also clamps the stored offset so scrolling past the top is undone.
    pub fn first_visible_line(&mut self, total: usize, height: usize) -> usize {
        let max_offset = total.saturating_sub(height);
        self.offset_from_bottom = self.offset_from_bottom.min(max_offset);
        max_offset - self.offset_from_bottom
    }
}
