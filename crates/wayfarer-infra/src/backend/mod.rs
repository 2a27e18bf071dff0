//! Backend HTTP clients.
//!
//! reqwest implementations of the `ChatBackend` and `SearchBackend` ports.
//! Both backends expose a single JSON `POST {base}/chat` route; no
//! authentication headers are sent.

pub mod chat;
pub mod search;

pub use chat::ChatClient;
pub use search::SearchClient;
