//! SearchClient -- concrete [`SearchBackend`] implementation.
//!
//! Sends `{query}` to the search service's `/chat` route. The body is
//! decoded on every status: the backend returns structured error payloads
//! with 4xx/5xx alongside whatever partial results it still produced, so a
//! non-OK status resolves to `Ok(SearchReply)` carrying the error message.
//! Only transport and decode failures surface as `Err`.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use wayfarer_core::backend::SearchBackend;
use wayfarer_core::search::controller::SEARCH_FAILED_MESSAGE;
use wayfarer_types::error::BackendError;
use wayfarer_types::search::{SearchReply, SearchResponseBody};

/// Wire shape of a search query.
#[derive(Debug, Serialize)]
struct SearchQueryBody<'a> {
    query: &'a str,
}

/// reqwest-backed listings search client.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a new search client for the given base URL.
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

impl SearchBackend for SearchClient {
    async fn search(&self, query: &str) -> Result<SearchReply, BackendError> {
        let body = SearchQueryBody { query };

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let parsed: SearchResponseBody = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        if let Some(error) = &parsed.error {
            warn!(
                kind = error.kind.as_deref().unwrap_or("unknown"),
                status = status.as_u16(),
                "search backend reported an error"
            );
        }

        Ok(SearchReply::from_body(
            parsed,
            status.is_success(),
            SEARCH_FAILED_MESSAGE,
        ))
    }
}
