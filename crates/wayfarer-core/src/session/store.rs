//! Write-through persistence for the chat session.
//!
//! The durable store is a side channel, not a second owner: the view loads
//! it once at startup and writes through after each transition that changed
//! the transcript. Writes re-serialize the whole transcript every time --
//! no debouncing, no size cap.

use tracing::warn;

use wayfarer_types::error::StoreError;
use wayfarer_types::message::Message;

use crate::storage::kv_store::KvStore;

/// Durable store key holding the session identifier (JSON string).
pub const SESSION_ID_KEY: &str = "sessionId";

/// Durable store key holding the JSON-serialized transcript array.
pub const MESSAGES_KEY: &str = "messages";

/// Session state recovered from the durable store at startup.
#[derive(Debug, Default)]
pub struct SavedSession {
    pub session_id: Option<String>,
    pub transcript: Vec<Message>,
}

/// Typed access to the two well-known session keys over a [`KvStore`].
pub struct SessionStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the saved session identifier and transcript.
    ///
    /// A transcript that no longer deserializes (schema drift, manual
    /// edits) is treated as absent rather than failing startup.
    pub async fn load(&self) -> Result<SavedSession, StoreError> {
        let session_id = match self.store.get(SESSION_ID_KEY).await? {
            Some(serde_json::Value::String(id)) if !id.is_empty() => Some(id),
            Some(other) => {
                warn!(value = %other, "ignoring non-string saved session id");
                None
            }
            None => None,
        };

        let transcript = match self.store.get(MESSAGES_KEY).await? {
            Some(value) => match serde_json::from_value::<Vec<Message>>(value) {
                Ok(messages) => messages,
                Err(e) => {
                    warn!(error = %e, "saved transcript is unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(SavedSession {
            session_id,
            transcript,
        })
    }

    /// Persist the session identifier.
    pub async fn save_session_id(&self, session_id: &str) -> Result<(), StoreError> {
        self.store
            .set(
                SESSION_ID_KEY,
                &serde_json::Value::String(session_id.to_string()),
            )
            .await
    }

    /// Persist the entire transcript.
    pub async fn save_transcript(&self, transcript: &[Message]) -> Result<(), StoreError> {
        let value = serde_json::to_value(transcript)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(MESSAGES_KEY, &value).await
    }

    /// Remove both saved keys.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.delete(SESSION_ID_KEY).await?;
        self.store.delete(MESSAGES_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory KvStore for controller-level tests.
    #[derive(Default)]
    struct MemoryStore {
        entries: Mutex<HashMap<String, serde_json::Value>>,
    }

    impl KvStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.clone());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), StoreError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let store = SessionStore::new(MemoryStore::default());
        let saved = store.load().await.unwrap();
        assert!(saved.session_id.is_none());
        assert!(saved.transcript.is_empty());
    }

    #[tokio::test]
    async fn test_roundtrip_session_and_transcript() {
        let store = SessionStore::new(MemoryStore::default());
        let transcript = vec![
            Message::user("hi"),
            Message::Text("hello there".to_string()),
        ];

        store.save_session_id("session-1").await.unwrap();
        store.save_transcript(&transcript).await.unwrap();

        let saved = store.load().await.unwrap();
        assert_eq!(saved.session_id.as_deref(), Some("session-1"));
        assert_eq!(saved.transcript, transcript);
    }

    #[tokio::test]
    async fn test_clear_removes_both_keys() {
        let store = SessionStore::new(MemoryStore::default());
        store.save_session_id("session-1").await.unwrap();
        store.save_transcript(&[Message::user("hi")]).await.unwrap();

        store.clear().await.unwrap();

        let saved = store.load().await.unwrap();
        assert!(saved.session_id.is_none());
        assert!(saved.transcript.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_transcript_degrades_to_empty() {
        let memory = MemoryStore::default();
        memory
            .set(MESSAGES_KEY, &serde_json::json!({"not": "an array"}))
            .await
            .unwrap();
        memory
            .set(SESSION_ID_KEY, &serde_json::json!("session-2"))
            .await
            .unwrap();

        let store = SessionStore::new(memory);
        let saved = store.load().await.unwrap();
        assert_eq!(saved.session_id.as_deref(), Some("session-2"));
        assert!(saved.transcript.is_empty());
    }

    #[tokio::test]
    async fn test_non_string_session_id_ignored() {
        let memory = MemoryStore::default();
        memory
            .set(SESSION_ID_KEY, &serde_json::json!(42))
            .await
            .unwrap();

        let store = SessionStore::new(memory);
        let saved = store.load().await.unwrap();
        assert!(saved.session_id.is_none());
    }
}
