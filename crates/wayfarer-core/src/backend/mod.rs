//! Backend client ports.
//!
//! Both backends expose a single `POST {base}/chat` route; these traits are
//! what the view loops call, with reqwest implementations in
//! wayfarer-infra. Uses RPITIT (native async fn in traits).

use wayfarer_types::error::BackendError;
use wayfarer_types::message::Message;
use wayfarer_types::search::SearchReply;

/// Client port for the chat assistant backend.
pub trait ChatBackend: Send + Sync {
    /// Send a user query within a session; the reply is an ordered batch of
    /// transcript messages.
    fn send_query(
        &self,
        session_id: &str,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, BackendError>> + Send;
}

/// Client port for the listings search backend.
pub trait SearchBackend: Send + Sync {
    /// Run a free-text search. Non-OK statuses with a readable body still
    /// resolve to `Ok` (the reply carries the error message alongside any
    /// partial results); only transport and decode failures are `Err`.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<SearchReply, BackendError>> + Send;
}
