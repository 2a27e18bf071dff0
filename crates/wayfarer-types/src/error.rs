use thiserror::Error;

/// Errors from the durable local store (used by trait definitions in
/// wayfarer-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from backend HTTP calls.
///
/// The three-way split mirrors how the views react: transport failures get
/// a fixed "backend unavailable" treatment, non-success statuses may carry
/// a server-supplied message, and malformed bodies are logged with the
/// decode failure.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never reached or never returned from the backend.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("backend returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The response arrived but could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Status {
            status: 502,
            message: Some("upstream died".to_string()),
        };
        assert_eq!(err.to_string(), "backend returned status 502");

        let err = BackendError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
