//! Input area: start control, message box, and keybind hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::widgets::InputBoxWidget;

use super::theme::Palette;

/// Input title while the field accepts a message.
pub const INPUT_TITLE_READY: &str = " Message ";

/// Input title while a turn is in flight.
pub const INPUT_TITLE_BUSY: &str = " Waiting for reply… ";

/// Label of the one-shot start control.
pub const START_LABEL: &str = "[ Start chat ]";

pub fn input_title(enabled: bool) -> &'static str {
    if enabled {
        INPUT_TITLE_READY
    } else {
        INPUT_TITLE_BUSY
    }
}

/// The start control line, shown until the chat is started.
pub fn render_start_control(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let style = if app.is_input_enabled() {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let line = Line::from(vec![
        Span::styled(START_LABEL, style),
        Span::styled("  press Enter to begin", Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line).centered(), area);
}

pub fn render_input_box(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let enabled = app.is_input_enabled();
    frame.render_widget(
        InputBoxWidget::new(&app.input, input_title(enabled), enabled, palette),
        area,
    );
}

/// Context-dependent key hints.
pub fn build_keybind_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    if app.start_pending && app.input.is_empty() {
        hints.push(("Enter", "start"));
    } else if app.is_input_enabled() {
        hints.push(("Enter", "send"));
    }
    hints.push(("PgUp/PgDn", "scroll"));
    hints.push(("Ctrl+T", "theme"));
    hints.push(("Esc", "quit"));
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = Vec::new();
    for (i, (key, action)) in build_keybind_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(palette.dim)));
        }
        spans.push(Span::styled(
            key,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(palette.dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::startup::ClientConfig;
    use std::sync::Arc;

    fn new_app() -> App {
        App::with_http_client(Arc::new(MockHttpClient::new()), &ClientConfig::default())
    }

    #[test]
    fn test_input_title() {
        assert_eq!(input_title(true), INPUT_TITLE_READY);
        assert_eq!(input_title(false), INPUT_TITLE_BUSY);
    }

    #[test]
    fn test_hints_offer_start_first() {
        let app = new_app();
        assert_eq!(build_keybind_hints(&app)[0], ("Enter", "start"));
    }

    #[test]
    fn test_hints_offer_send_with_draft() {
        let mut app = new_app();
        app.input.set_content("hi".to_string());
        assert_eq!(build_keybind_hints(&app)[0], ("Enter", "send"));

        app.start_pending = false;
        app.input.clear();
        assert_eq!(build_keybind_hints(&app)[0], ("Enter", "send"));
    }

    #[tokio::test]
    async fn test_hints_hide_send_while_busy() {
        let mut app = new_app();
        app.start_chat();
        assert!(build_keybind_hints(&app)
            .iter()
            .all(|(key, _)| *key != "Enter"));
    }
}
