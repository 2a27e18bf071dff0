//! Chat session controller.
//!
//! Owns the conversation transcript, the session identifier, and the
//! pending-response flag. The controller never performs I/O: `submit`
//! returns the request the view should issue, and the view feeds completed
//! batches (or failures) back in. Persistence is a separate explicit step
//! (see [`super::store`]) the view invokes after each transition.

use tracing::warn;
use uuid::Uuid;

use wayfarer_types::error::BackendError;
use wayfarer_types::message::Message;

/// Fixed user-visible message for chat request failures.
pub const CHAT_UNAVAILABLE_MESSAGE: &str =
    "Assistant unavailable. Check that the chat backend is running.";

/// An outbound chat request the view should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub session_id: String,
    pub query: String,
}

/// State machine for the chat view.
///
/// The transcript is append-only; messages are never edited or removed
/// except by [`ChatSessionController::reset`], which discards the whole
/// conversation along with the session identifier.
#[derive(Debug)]
pub struct ChatSessionController {
    session_id: String,
    transcript: Vec<Message>,
    pending: bool,
    error_message: Option<String>,
}

impl ChatSessionController {
    /// Start a fresh session with a new random identifier.
    pub fn new() -> Self {
        Self::restore(new_session_id(), Vec::new())
    }

    /// Resume a session recovered from the durable store.
    pub fn restore(session_id: String, transcript: Vec<Message>) -> Self {
        Self {
            session_id,
            transcript,
            pending: false,
            error_message: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether a response is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Last surfaced failure, cleared by the next submit.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Submit a user query.
    ///
    /// Blank or whitespace-only input is a no-op: nothing is appended and
    /// no request is issued. Otherwise the user message lands in the
    /// transcript immediately (before any network activity) and the
    /// returned request is handed to the view to send. Submitting while a
    /// request is outstanding is allowed; batches apply in arrival order.
    pub fn submit(&mut self, query: &str) -> Option<ChatRequest> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.transcript.push(Message::user(trimmed));
        self.error_message = None;
        self.pending = true;

        Some(ChatRequest {
            session_id: self.session_id.clone(),
            query: trimmed.to_string(),
        })
    }

    /// Append one response item to the transcript.
    ///
    /// The pending flag clears here, inside the per-item step, so the
    /// loading indicator drops as soon as the first item of a batch lands
    /// even if more items are still being appended.
    pub fn append_response_item(&mut self, message: Message) {
        self.transcript.push(message);
        self.pending = false;
    }

    /// Apply a whole response batch in the order received.
    pub fn apply_response(&mut self, items: Vec<Message>) {
        for item in items {
            self.append_response_item(item);
        }
    }

    /// Record a failed request: clear the pending flag and surface a fixed
    /// chat-level error message. No message is appended.
    pub fn apply_failure(&mut self, error: &BackendError) {
        warn!(error = %error, "chat request failed");
        self.pending = false;
        self.error_message = Some(CHAT_UNAVAILABLE_MESSAGE.to_string());
    }

    /// Discard the conversation and start over with a new identifier.
    ///
    /// The new identifier is always previously unseen. The caller is
    /// responsible for clearing the durable store.
    pub fn reset(&mut self) {
        self.session_id = new_session_id();
        self.transcript.clear();
        self.pending = false;
        self.error_message = None;
    }
}

impl Default for ChatSessionController {
    fn default() -> Self {
        Self::new()
    }
}

fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_types::message::Message;

    #[test]
    fn test_submit_appends_user_message_before_response() {
        let mut ctrl = ChatSessionController::new();
        let request = ctrl.submit("2 bed 1 bath").unwrap();

        assert_eq!(request.query, "2 bed 1 bath");
        assert_eq!(request.session_id, ctrl.session_id());
        assert_eq!(ctrl.transcript().len(), 1);
        assert_eq!(ctrl.transcript()[0], Message::user("2 bed 1 bath"));
        assert!(ctrl.is_pending());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut ctrl = ChatSessionController::new();
        assert!(ctrl.submit("").is_none());
        assert!(ctrl.submit("   \t  ").is_none());
        assert!(ctrl.transcript().is_empty());
        assert!(!ctrl.is_pending());
    }

    #[test]
    fn test_submit_trims_input() {
        let mut ctrl = ChatSessionController::new();
        let request = ctrl.submit("  hello  ").unwrap();
        assert_eq!(request.query, "hello");
        assert_eq!(ctrl.transcript()[0], Message::user("hello"));
    }

    #[test]
    fn test_pending_clears_on_first_appended_item() {
        let mut ctrl = ChatSessionController::new();
        ctrl.submit("show me a table").unwrap();
        assert!(ctrl.is_pending());

        ctrl.append_response_item(Message::Text("first".to_string()));
        assert!(!ctrl.is_pending());

        // Later items of the same batch append with pending already clear.
        ctrl.append_response_item(Message::Text("second".to_string()));
        assert_eq!(ctrl.transcript().len(), 3);
        assert!(!ctrl.is_pending());
    }

    #[test]
    fn test_apply_response_appends_in_order() {
        let mut ctrl = ChatSessionController::new();
        ctrl.submit("hi").unwrap();
        ctrl.apply_response(vec![
            Message::Text("a".to_string()),
            Message::Plot("chart.png".to_string()),
        ]);

        assert_eq!(ctrl.transcript().len(), 3);
        assert_eq!(ctrl.transcript()[1], Message::Text("a".to_string()));
        assert_eq!(ctrl.transcript()[2], Message::Plot("chart.png".to_string()));
    }

    #[test]
    fn test_double_submit_applies_in_arrival_order() {
        let mut ctrl = ChatSessionController::new();
        ctrl.submit("first question").unwrap();
        ctrl.submit("second question").unwrap();

        // Second request's batch arrives first.
        ctrl.apply_response(vec![Message::Text("answer two".to_string())]);
        ctrl.apply_response(vec![Message::Text("answer one".to_string())]);

        let transcript = ctrl.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0], Message::user("first question"));
        assert_eq!(transcript[1], Message::user("second question"));
        assert_eq!(transcript[2], Message::Text("answer two".to_string()));
        assert_eq!(transcript[3], Message::Text("answer one".to_string()));
    }

    #[test]
    fn test_failure_clears_pending_and_surfaces_message() {
        let mut ctrl = ChatSessionController::new();
        ctrl.submit("hello").unwrap();

        let err = wayfarer_types::error::BackendError::Transport("refused".to_string());
        ctrl.apply_failure(&err);

        assert!(!ctrl.is_pending());
        assert_eq!(ctrl.error_message(), Some(CHAT_UNAVAILABLE_MESSAGE));
        // No message appended beyond the optimistic user message.
        assert_eq!(ctrl.transcript().len(), 1);
    }

    #[test]
    fn test_error_clears_on_next_submit() {
        let mut ctrl = ChatSessionController::new();
        ctrl.submit("hello").unwrap();
        ctrl.apply_failure(&wayfarer_types::error::BackendError::Transport(
            "refused".to_string(),
        ));
        assert!(ctrl.error_message().is_some());

        ctrl.submit("retry").unwrap();
        assert!(ctrl.error_message().is_none());
    }

    #[test]
    fn test_reset_generates_unseen_id_and_empties_transcript() {
        let mut ctrl = ChatSessionController::new();
        let mut seen = std::collections::HashSet::new();
        seen.insert(ctrl.session_id().to_string());

        ctrl.submit("hello").unwrap();
        ctrl.apply_response(vec![Message::Text("hi".to_string())]);

        for _ in 0..10 {
            ctrl.reset();
            assert!(ctrl.transcript().is_empty());
            assert!(!ctrl.is_pending());
            assert!(seen.insert(ctrl.session_id().to_string()), "session id reused");
        }
    }

    #[test]
    fn test_restore_resumes_saved_state() {
        let transcript = vec![Message::user("hi"), Message::Text("hello".to_string())];
        let ctrl = ChatSessionController::restore("abc-123".to_string(), transcript.clone());
        assert_eq!(ctrl.session_id(), "abc-123");
        assert_eq!(ctrl.transcript(), transcript.as_slice());
        assert!(!ctrl.is_pending());
    }
}
