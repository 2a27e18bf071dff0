//! Search endpoint wire and reply types.
//!
//! The search backend answers `POST /chat` with `{listings, filters}` and,
//! on failures it can describe, an `error` object alongside whatever partial
//! results it still produced. The body is parsed the same way regardless of
//! HTTP status; [`SearchReply`] is the normalized form handed to the
//! controller.

use serde::Deserialize;

use crate::listing::{Listing, ListingRecord};

/// Structured error object the search backend embeds in a reply body.
///
/// `kind` is a backend-internal discriminator (`validation_error`,
/// `llm_error`, `query_execution_error`, ...) and is only logged; `message`
/// is what gets surfaced to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw search response body.
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    #[serde(default)]
    pub listings: Vec<ListingRecord>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// A normalized search reply: listings, filter chips, and the user-facing
/// error message (if the backend reported one or the status was non-OK).
#[derive(Debug, Clone, Default)]
pub struct SearchReply {
    pub listings: Vec<Listing>,
    pub filters: Vec<String>,
    pub error_message: Option<String>,
}

impl SearchReply {
    /// Normalize a parsed body, attaching `error_message` when the HTTP
    /// status was non-OK. The server-supplied message wins; `fallback`
    /// covers replies whose error object carried no message.
    pub fn from_body(body: SearchResponseBody, ok_status: bool, fallback: &str) -> Self {
        let server_message = body.error.as_ref().and_then(|e| e.message.clone());
        let error_message = if ok_status {
            None
        } else {
            Some(server_message.unwrap_or_else(|| fallback.to_string()))
        };

        SearchReply {
            listings: body.listings.into_iter().map(Listing::from).collect(),
            filters: body.filters,
            error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_body_has_no_error() {
        let body: SearchResponseBody = serde_json::from_str(
            r#"{"listings": [{"idStr": "1", "name": "A"}], "filters": ["Wifi"]}"#,
        )
        .unwrap();
        let reply = SearchReply::from_body(body, true, "Search failed.");
        assert_eq!(reply.listings.len(), 1);
        assert_eq!(reply.filters, vec!["Wifi"]);
        assert!(reply.error_message.is_none());
    }

    #[test]
    fn test_non_ok_surfaces_server_message() {
        let body: SearchResponseBody = serde_json::from_str(
            r#"{"listings": [], "filters": [], "error": {"type": "llm_error", "message": "model overloaded"}}"#,
        )
        .unwrap();
        let reply = SearchReply::from_body(body, false, "Search failed.");
        assert_eq!(reply.error_message.as_deref(), Some("model overloaded"));
        assert!(reply.listings.is_empty());
    }

    #[test]
    fn test_non_ok_without_message_uses_fallback() {
        let body: SearchResponseBody =
            serde_json::from_str(r#"{"listings": [], "filters": []}"#).unwrap();
        let reply = SearchReply::from_body(body, false, "Search failed. Please try again.");
        assert_eq!(
            reply.error_message.as_deref(),
            Some("Search failed. Please try again.")
        );
    }

    #[test]
    fn test_non_ok_with_partial_listings_keeps_them() {
        let body: SearchResponseBody = serde_json::from_str(
            r#"{"listings": [{"idStr": "7"}], "filters": ["Pool"], "error": {"type": "query_execution_error", "message": "bad column"}}"#,
        )
        .unwrap();
        let reply = SearchReply::from_body(body, false, "Search failed.");
        assert_eq!(reply.listings.len(), 1);
        assert_eq!(reply.filters, vec!["Pool"]);
        assert_eq!(reply.error_message.as_deref(), Some("bad column"));
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let body: SearchResponseBody = serde_json::from_str("{}").unwrap();
        let reply = SearchReply::from_body(body, true, "x");
        assert!(reply.listings.is_empty());
        assert!(reply.filters.is_empty());
    }
}
