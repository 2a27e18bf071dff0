//! ChatClient -- concrete [`ChatBackend`] implementation.
//!
//! Sends `{session_id, query}` to the chat assistant's `/chat` route and
//! decodes the reply as an ordered array of transcript messages.

use std::time::Duration;

use serde::Serialize;

use wayfarer_core::backend::ChatBackend;
use wayfarer_types::error::BackendError;
use wayfarer_types::message::Message;

/// Wire shape of a chat query.
#[derive(Debug, Serialize)]
struct ChatQueryBody<'a> {
    session_id: &'a str,
    query: &'a str,
}

/// reqwest-backed chat assistant client.
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// Create a new chat client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }
}

impl ChatBackend for ChatClient {
    async fn send_query(
        &self,
        session_id: &str,
        query: &str,
    ) -> Result<Vec<Message>, BackendError> {
        let body = ChatQueryBody { session_id, query };

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        response
            .json::<Vec<Message>>()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))
    }
}
