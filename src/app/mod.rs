//! Application state and logic for the TUI.
//!
//! - [`App`] - event-driven shell around one conversation
//! - [`ConversationController`] - owns the state token and runs turns
//! - [`AppMessage`] - results posted back from async tasks

mod controller;
mod handlers;
mod messages;

pub use controller::{ConversationController, SubmitOutcome, FALLBACK_REPLY};
pub use messages::AppMessage;

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapters::ReqwestHttpClient;
use crate::dialogue::DialogueClient;
use crate::models::ConversationState;
use crate::startup::ClientConfig;
use crate::traits::HttpClient;
use crate::transcript::Transcript;
use crate::ui::theme::ThemeMode;
use crate::widgets::InputBox;

/// Ticks per typing-indicator frame (16ms tick, so roughly 130ms).
pub const TYPING_FRAME_TICKS: u64 = 8;

/// Main application state
pub struct App {
    /// Turn runner and conversation state
    pub controller: ConversationController,
    /// The visible thread
    pub transcript: Transcript,
    /// Message input
    pub input: InputBox,
    /// Active color theme
    pub theme: ThemeMode,
    /// The one-shot "Start chat" control is still showing
    pub start_pending: bool,
    /// Receiver for async messages; the main loop takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Chat endpoint, shown in the header
    pub endpoint: String,
}

impl App {
    /// Create an App talking to the configured service over reqwest.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = match config.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
            None => ReqwestHttpClient::new(),
        };
        Ok(Self::with_http_client(Arc::new(http), config))
    }

    /// Create an App over any [`HttpClient`].
    pub fn with_http_client(http: Arc<dyn HttpClient>, config: &ClientConfig) -> Self {
        let endpoint = config.endpoint_url();
        let client = Arc::new(DialogueClient::new(http, config.base_url(), endpoint.clone()));
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            controller: ConversationController::new(client, message_tx),
            transcript: Transcript::new(),
            input: InputBox::new(),
            theme: ThemeMode::from_dark(config.dark_mode),
            start_pending: true,
            message_rx: Some(message_rx),
            needs_redraw: true,
            tick_count: 0,
            should_quit: false,
            endpoint,
        }
    }

    /// Fire the one-shot start trigger.
    ///
    /// Removes the start control and sends an empty system turn so the
    /// service's opening message seeds the thread. Refused, with the control
    /// kept, while another turn is in flight.
    pub fn start_chat(&mut self) -> SubmitOutcome {
        if !self.start_pending {
            debug!("Start control already used");
            return SubmitOutcome::Ignored;
        }
        if self.controller.is_turn_in_flight() {
            return SubmitOutcome::Busy;
        }

        self.start_pending = false;
        info!("Starting chat");
        let outcome = self.controller.submit_turn(&mut self.transcript, "", true);
        self.mark_dirty();
        outcome
    }

    /// Send whatever is in the input field.
    ///
    /// The field is cleared only when the turn was dispatched, so a draft
    /// typed during an in-flight turn survives the refusal.
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let utterance = self.input.get_content().to_string();
        let outcome = self
            .controller
            .submit_turn(&mut self.transcript, &utterance, false);
        if outcome.is_dispatched() {
            self.input.clear();
        }
        self.mark_dirty();
        outcome
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = ?self.theme, "Theme toggled");
        self.mark_dirty();
    }

    /// Whether the input accepts a submission right now.
    pub fn is_input_enabled(&self) -> bool {
        !self.controller.is_turn_in_flight()
    }

    pub fn state(&self) -> &ConversationState {
        self.controller.state()
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.transcript.has_placeholder() && self.tick_count % TYPING_FRAME_TICKS == 0 {
            self.mark_dirty();
        }
    }

    /// Index of the highlighted typing dot for the current tick.
    pub fn typing_frame(&self) -> usize {
        ((self.tick_count / TYPING_FRAME_TICKS) % 3) as usize
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
