//! UI rendering.
//!
//! One screen, top to bottom:
//! - Header with title, endpoint, turn status, and theme icon
//! - Transcript pane (bottom-anchored)
//! - Start control (until the chat is started)
//! - Message input
//! - Keybind hints

pub mod input;
pub mod theme;
pub mod transcript;

pub use theme::{Palette, ThemeMode};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use input::{render_footer, render_input_box, render_start_control};
use transcript::render_transcript;

/// Header title.
pub const APP_TITLE: &str = "chatshell";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let start_height = if app.start_pending { 1 } else { 0 };
    let [header, body, start, input, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(start_height),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app, &palette);
    let typing_frame = app.typing_frame();
    render_transcript(frame, body, &mut app.transcript, &palette, typing_frame);
    if app.start_pending {
        render_start_control(frame, start, app, &palette);
    }
    render_input_box(frame, input, app, &palette);
    render_footer(frame, footer, app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let status = if app.controller.is_turn_in_flight() {
        Span::styled("● waiting", Style::default().fg(palette.accent))
    } else {
        Span::styled("○ idle", Style::default().fg(palette.dim))
    };

    let left = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}  ", app.endpoint), Style::default().fg(palette.dim)),
        status,
    ]);
    let right = Line::from(Span::styled(
        format!("{} ", app.theme.icon()),
        Style::default().fg(palette.accent),
    ));

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(Paragraph::new(right).right_aligned(), area);
}
