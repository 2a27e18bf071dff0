//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `wayfarer-core` using sqlx with split
//! read/write pools. Values are stored as JSON text and deserialized on
//! read. This is the client's only durable local storage.

use chrono::{DateTime, Utc};
use sqlx::Row;

use wayfarer_core::storage::kv_store::KvStore;
use wayfarer_types::error::StoreError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new KV store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let row = sqlx::query("SELECT value FROM local_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value_str: String = row
                    .try_get("value")
                    .map_err(|e| StoreError::Query(e.to_string()))?;
                let value: serde_json::Value = serde_json::from_str(&value_str)
                    .map_err(|e| StoreError::Serialization(format!("invalid JSON value: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let now = format_datetime(&Utc::now());
        let value_str = serde_json::to_string(value)
            .map_err(|e| StoreError::Serialization(format!("failed to serialize value: {e}")))?;

        sqlx::query(
            r#"INSERT INTO local_store (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(&value_str)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM local_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let store = SqliteKvStore::new(test_pool().await);

        let value = serde_json::json!({"theme": "dark"});
        store.set("settings", &value).await.unwrap();

        let got = store.get("settings").await.unwrap();
        assert_eq!(got, Some(value));
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_none() {
        let store = SqliteKvStore::new(test_pool().await);
        let got = store.get("missing").await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_set_upserts() {
        let store = SqliteKvStore::new(test_pool().await);

        store.set("counter", &serde_json::json!(1)).await.unwrap();
        store.set("counter", &serde_json::json!(2)).await.unwrap();

        let got = store.get("counter").await.unwrap();
        assert_eq!(got, Some(serde_json::json!(2)));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = SqliteKvStore::new(test_pool().await);

        store.set("temp", &serde_json::json!("value")).await.unwrap();
        store.delete("temp").await.unwrap();

        let got = store.get("temp").await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let store = SqliteKvStore::new(test_pool().await);
        store.delete("nope").await.unwrap();
    }

    #[tokio::test]
    async fn test_transcript_shaped_value_roundtrips() {
        let store = SqliteKvStore::new(test_pool().await);

        let transcript = serde_json::json!([
            {"type": "user", "content": "hi"},
            {"type": "text", "content": "hello"},
            {"type": "table", "content": [{"name": "A", "price": 100}]}
        ]);
        store.set("messages", &transcript).await.unwrap();

        let got = store.get("messages").await.unwrap();
        assert_eq!(got, Some(transcript));
    }

    #[tokio::test]
    async fn test_persists_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("persist.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        {
            let pool = DatabasePool::new(&url).await.unwrap();
            let store = SqliteKvStore::new(pool);
            store
                .set("sessionId", &serde_json::json!("abc-123"))
                .await
                .unwrap();
        }

        let pool = DatabasePool::new(&url).await.unwrap();
        let store = SqliteKvStore::new(pool);
        let got = store.get("sessionId").await.unwrap();
        assert_eq!(got, Some(serde_json::json!("abc-123")));
    }
}
