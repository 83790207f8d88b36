//! Color themes.
//!
//! The active theme is a process-lifetime preference, toggled with Ctrl+T
//! and never persisted.

use ratatui::style::Color;

/// Colors used by every render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Body text
    pub text: Color,
    /// Borders, hints, and the disabled input
    pub dim: Color,
    /// Focused borders, cursor, and the live typing dot
    pub accent: Color,
    /// Label for user entries
    pub user_label: Color,
    /// Label for agent entries
    pub agent_label: Color,
    /// `**bold**` fragments in agent replies
    pub emphasis: Color,
    /// Input field background
    pub input_bg: Color,
}

// ============================================================================
// Light Theme
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    text: Color::Rgb(33, 33, 33),
    dim: Color::Rgb(150, 150, 150),
    accent: Color::Rgb(0, 122, 204), // blue #007ACC
    user_label: Color::Rgb(0, 122, 204),
    agent_label: Color::Rgb(4, 150, 100),
    emphasis: Color::Rgb(0, 0, 0),
    input_bg: Color::Rgb(255, 255, 255),
};

// ============================================================================
// Dark Theme
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(18, 18, 24),
    text: Color::Rgb(220, 220, 220),
    dim: Color::DarkGray,
    accent: Color::Cyan,
    user_label: Color::Cyan,
    agent_label: Color::Rgb(4, 181, 117), // green #04B575
    emphasis: Color::White,
    input_bg: Color::Rgb(20, 20, 30),
};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    /// Header icon: the mode a toggle would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}
