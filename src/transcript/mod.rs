//! The visible thread: an append-only sequence of entries plus at most one
//! transient "agent is responding" placeholder.
//!
//! Rendering to the terminal lives in `crate::ui::transcript`; this module
//! owns the ordering, placeholder lifecycle, and scroll pinning rules.

pub mod normalize;
pub mod scroll;

pub use normalize::{normalize_agent_text, normalize_user_text, Fragment, NormalizedText};
pub use scroll::ScrollState;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{Sender, TranscriptEntry};

/// Identifies one pending placeholder row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderHandle(Uuid);

impl PlaceholderHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for PlaceholderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "typing-{}", self.0)
    }
}

/// One row of the thread.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptRow {
    Entry(TranscriptEntry),
    Placeholder(PlaceholderHandle),
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    rows: Vec<TranscriptRow>,
    scroll: ScrollState,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and pin the view to it.
    pub fn append_entry(&mut self, sender: Sender, text: &str) {
        self.rows
            .push(TranscriptRow::Entry(TranscriptEntry::new(sender, text)));
        self.scroll.pin_to_bottom();
    }

    /// Append a typing indicator attributed to the agent.
    ///
    /// The returned handle is good for one [`remove_placeholder`](Self::remove_placeholder).
    pub fn show_placeholder(&mut self) -> PlaceholderHandle {
        let before = self.rows.len();
        self.rows
            .retain(|row| !matches!(row, TranscriptRow::Placeholder(_)));
        if self.rows.len() != before {
            warn!("Replacing a stale typing placeholder");
        }

        let handle = PlaceholderHandle::new();
        self.rows.push(TranscriptRow::Placeholder(handle));
        self.scroll.pin_to_bottom();
        debug!(%handle, "Placeholder shown");
        handle
    }

    /// Remove the placeholder for `handle` if it is still present.
    ///
    /// Returns false (and changes nothing) when it is already gone.
    pub fn remove_placeholder(&mut self, handle: PlaceholderHandle) -> bool {
        let position = self
            .rows
            .iter()
            .position(|row| *row == TranscriptRow::Placeholder(handle));

        match position {
            Some(index) => {
                self.rows.remove(index);
                self.scroll.pin_to_bottom();
                debug!(%handle, "Placeholder removed");
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[TranscriptRow] {
        &self.rows
    }

    /// Real entries in chronological order, placeholder excluded.
    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.rows.iter().filter_map(|row| match row {
            TranscriptRow::Entry(entry) => Some(entry),
            TranscriptRow::Placeholder(_) => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, TranscriptRow::Placeholder(_)))
            .count()
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}
