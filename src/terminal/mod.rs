//! The chat owns the terminal between `TerminalManager::new` and drop.
//!
//! Raw mode and the screen modes in `setup` are switched on together and
//! off together however the chat ends. Panics are covered by
//! [`setup_panic_hook`].

mod panic;
mod setup;

pub use panic::setup_panic_hook;

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use setup::{enter_tui_mode, leave_tui_mode};

pub type ChatTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalManager {
    terminal: ChatTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Take over stdout and clear the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut ChatTerminal {
        &mut self.terminal
    }

    /// Hand the terminal back to the shell. Idempotent; drop calls it too.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
