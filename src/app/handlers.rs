//! Input and message handling for the App.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use super::{App, AppMessage};

/// Lines moved per PageUp/PageDown.
pub const PAGE_SCROLL_LINES: usize = 10;

/// Lines moved per arrow key or wheel notch.
pub const LINE_SCROLL_LINES: usize = 1;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::TurnFinished { handle, result } => {
                self.controller
                    .complete_turn(&mut self.transcript, handle, result);
            }
        }
    }

    /// Route a terminal event. Returns false for events that change nothing.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key);
                true
            }
            Event::Paste(text) => {
                self.input.insert_str(&text);
                self.mark_dirty();
                true
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => {
                    self.transcript.scroll_mut().scroll_up(LINE_SCROLL_LINES);
                    self.mark_dirty();
                    true
                }
                MouseEventKind::ScrollDown => {
                    self.transcript.scroll_mut().scroll_down(LINE_SCROLL_LINES);
                    self.mark_dirty();
                    true
                }
                _ => false,
            },
            Event::Resize(_, _) => {
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => {
                // Enter on an empty field uses the start control while it is showing
                if self.start_pending && self.input.is_empty() {
                    self.start_chat();
                } else {
                    self.submit_input();
                }
            }
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            KeyCode::PageUp => self.transcript.scroll_mut().scroll_up(PAGE_SCROLL_LINES),
            KeyCode::PageDown => self.transcript.scroll_mut().scroll_down(PAGE_SCROLL_LINES),
            KeyCode::Up => self.transcript.scroll_mut().scroll_up(LINE_SCROLL_LINES),
            KeyCode::Down => self.transcript.scroll_mut().scroll_down(LINE_SCROLL_LINES),
            _ => {}
        }
    }
}
