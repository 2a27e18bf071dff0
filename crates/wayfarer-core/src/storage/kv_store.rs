//! Key-value store trait.
//!
//! The client's only durable state is a small key-value store. Uses RPITIT
//! (native async fn in traits, Rust 2024 edition). Implementations live in
//! wayfarer-infra.

use wayfarer_types::error::StoreError;

/// Trait for the durable local key-value store.
///
/// Values are arbitrary JSON. Keys are plain strings; the well-known keys
/// the chat view uses are defined in [`crate::session::store`].
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete a key. No-op if the key does not exist.
    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
