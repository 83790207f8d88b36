//! Conversation controller: owns the conversation state and runs turns.
//!
//! A turn is split across two calls so the network round trip never blocks
//! the UI loop. [`ConversationController::submit_turn`] records the user
//! entry, shows the placeholder, and spawns the request. The spawned task
//! posts [`AppMessage::TurnFinished`] back to the app, which hands it to
//! [`ConversationController::complete_turn`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::dialogue::DialogueClient;
use crate::error::TurnError;
use crate::models::{ConversationState, Sender, TurnRequest, TurnResponse};
use crate::transcript::{PlaceholderHandle, Transcript};

use super::AppMessage;

/// Agent entry shown in place of a reply when a turn fails.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// What [`ConversationController::submit_turn`] did with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request sent; the handle identifies its placeholder
    Dispatched(PlaceholderHandle),
    /// Blank user input, nothing happened
    Ignored,
    /// Another turn is still in flight, nothing happened
    Busy,
}

impl SubmitOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Dispatched(_))
    }
}

pub struct ConversationController {
    state: ConversationState,
    client: Arc<DialogueClient>,
    in_flight: Option<PlaceholderHandle>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl ConversationController {
    /// Start a conversation at the initial state.
    pub fn new(client: Arc<DialogueClient>, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            state: ConversationState::initial(),
            client,
            in_flight: None,
            message_tx,
        }
    }

    /// Current conversation state, exactly as last received.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn is_turn_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<PlaceholderHandle> {
        self.in_flight
    }

    /// Begin a turn.
    ///
    /// Must be called from within a tokio runtime. The user entry and the
    /// placeholder are in the transcript before the request task is spawned.
    pub fn submit_turn(
        &mut self,
        transcript: &mut Transcript,
        utterance: &str,
        is_system_trigger: bool,
    ) -> SubmitOutcome {
        if utterance.is_empty() && !is_system_trigger {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        if let Some(pending) = self.in_flight {
            debug!(%pending, "Turn already in flight, refusing submission");
            return SubmitOutcome::Busy;
        }

        if !is_system_trigger {
            transcript.append_entry(Sender::User, utterance);
        }

        let handle = transcript.show_placeholder();
        self.in_flight = Some(handle);

        let request = TurnRequest::new(utterance, self.state.clone());
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();

        info!(
            %handle,
            system = is_system_trigger,
            chars = utterance.chars().count(),
            "Dispatching turn"
        );

        tokio::spawn(async move {
            let result = client.send_turn(&request).await;
            if tx.send(AppMessage::TurnFinished { handle, result }).is_err() {
                debug!(%handle, "App gone before turn finished");
            }
        });

        SubmitOutcome::Dispatched(handle)
    }

    /// Apply the outcome of a dispatched turn.
    ///
    /// On success the state is replaced wholesale. On failure it is left
    /// as-is so the next turn resends the last good state. Either way the
    /// placeholder goes before the agent entry is appended.
    pub fn complete_turn(
        &mut self,
        transcript: &mut Transcript,
        handle: PlaceholderHandle,
        result: Result<TurnResponse, TurnError>,
    ) {
        if self.in_flight != Some(handle) {
            warn!(%handle, "Discarding completion for a turn that is not in flight");
            transcript.remove_placeholder(handle);
            return;
        }
        self.in_flight = None;

        match result {
            Ok(reply) => {
                info!(%handle, chars = reply.response.chars().count(), "Turn completed");
                self.state = reply.context;
                transcript.remove_placeholder(handle);
                transcript.append_entry(Sender::Agent, &reply.response);
            }
            Err(e) => {
                warn!(
                    %handle,
                    code = e.error_code(),
                    category = %e.category(),
                    error = %e,
                    "Turn failed"
                );
                transcript.remove_placeholder(handle);
                transcript.append_entry(Sender::Agent, FALLBACK_REPLY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};

    const ENDPOINT: &str = "http://svc/chat";

    fn setup(mock: &MockHttpClient) -> (ConversationController, mpsc::UnboundedReceiver<AppMessage>) {
        let client = Arc::new(DialogueClient::new(Arc::new(mock.clone()), "http://svc", ENDPOINT));
        let (tx, rx) = mpsc::unbounded_channel();
        (ConversationController::new(client, tx), rx)
    }

    fn reply(text: &str, context: &str) -> MockResponse {
        MockResponse::Success(Response::new(
            200,
            format!(r#"{{"response":{},"context":{}}}"#, serde_json::json!(text), context),
        ))
    }

    async fn finish(
        controller: &mut ConversationController,
        transcript: &mut Transcript,
        rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    ) {
        let AppMessage::TurnFinished { handle, result } = rx.recv().await.unwrap();
        controller.complete_turn(transcript, handle, result);
    }

    #[tokio::test]
    async fn test_empty_user_submission_is_ignored() {
        let mock = MockHttpClient::new();
        let (mut controller, _rx) = setup(&mock);
        let mut transcript = Transcript::new();

        let outcome = controller.submit_turn(&mut transcript, "", false);

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(transcript.is_empty());
        assert!(!controller.is_turn_in_flight());
        tokio::task::yield_now().await;
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_successful_turn() {
        let mock = MockHttpClient::new();
        mock.set_response(ENDPOINT, reply("Hello", r#"{"state":"GREETED"}"#));
        let (mut controller, mut rx) = setup(&mock);
        let mut transcript = Transcript::new();

        let outcome = controller.submit_turn(&mut transcript, "hi", false);
        assert!(outcome.is_dispatched());
        assert!(controller.is_turn_in_flight());
        assert_eq!(transcript.entry_count(), 1);
        assert_eq!(transcript.placeholder_count(), 1);

        finish(&mut controller, &mut transcript, &mut rx).await;

        assert!(!controller.is_turn_in_flight());
        assert_eq!(transcript.placeholder_count(), 0);
        let entries: Vec<_> = transcript.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].sender, Sender::Agent);
        assert_eq!(entries[1].text, "Hello");
        assert_eq!(controller.state().as_json(), r#"{"state":"GREETED"}"#);
    }

    #[tokio::test]
    async fn test_failed_turn_keeps_state_and_shows_fallback() {
        let mock = MockHttpClient::new();
        mock.set_response(
            ENDPOINT,
            MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        );
        let (mut controller, mut rx) = setup(&mock);
        let mut transcript = Transcript::new();
        let before = controller.state().clone();

        controller.submit_turn(&mut transcript, "hi", false);
        finish(&mut controller, &mut transcript, &mut rx).await;

        assert_eq!(controller.state(), &before);
        assert_eq!(transcript.placeholder_count(), 0);
        let last = transcript.entries().last().unwrap();
        assert_eq!(last.sender, Sender::Agent);
        assert_eq!(last.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_second_submission_is_refused_while_in_flight() {
        let mock = MockHttpClient::new();
        mock.set_response(ENDPOINT, reply("ok", "{}"));
        let (mut controller, mut rx) = setup(&mock);
        let mut transcript = Transcript::new();

        controller.submit_turn(&mut transcript, "first", false);
        let outcome = controller.submit_turn(&mut transcript, "second", false);

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert_eq!(transcript.entry_count(), 1);
        assert_eq!(transcript.placeholder_count(), 1);

        finish(&mut controller, &mut transcript, &mut rx).await;
        assert_eq!(mock.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_system_trigger_sends_empty_message_without_user_entry() {
        let mock = MockHttpClient::new();
        mock.set_response(ENDPOINT, reply("Welcome!", r#"{"state":"MENU"}"#));
        let (mut controller, mut rx) = setup(&mock);
        let mut transcript = Transcript::new();

        let outcome = controller.submit_turn(&mut transcript, "", true);
        assert!(outcome.is_dispatched());
        assert_eq!(transcript.entry_count(), 0);

        finish(&mut controller, &mut transcript, &mut rx).await;

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"message":"","context":{"state":"START"}}"#)
        );
        let entries: Vec<_> = transcript.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sender, Sender::Agent);
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let mock = MockHttpClient::new();
        mock.set_response(ENDPOINT, reply("ok", r#"{"state":"NEXT"}"#));
        let (mut controller, _rx) = setup(&mock);
        let mut transcript = Transcript::new();

        let mut other = Transcript::new();
        let stranger = other.show_placeholder();

        controller.submit_turn(&mut transcript, "hi", false);
        let response: TurnResponse =
            serde_json::from_str(r#"{"response":"late","context":{"state":"STALE"}}"#).unwrap();
        controller.complete_turn(&mut transcript, stranger, Ok(response));

        assert!(controller.is_turn_in_flight());
        assert_eq!(controller.state(), &ConversationState::initial());
        assert_eq!(transcript.entry_count(), 1);
        assert_eq!(transcript.placeholder_count(), 1);
    }
}
