//! Panics inside the TUI would print into the alternate screen and vanish.

use std::panic;

use tracing::error;

use super::setup::emergency_restore;

/// Restore the terminal, log the panic to the chat log, then run whatever
/// hook was installed before (color-eyre's report).
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        error!(panic = %info, "chatshell panicked");
        previous(info);
    }));
}
