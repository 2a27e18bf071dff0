//! Application state wiring the infrastructure together.
//!
//! AppState holds the concrete client and store instances used by the view
//! loops. Controllers and views are generic over the port traits, but
//! AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use wayfarer_core::session::store::SessionStore;
use wayfarer_infra::backend::{ChatClient, SearchClient};
use wayfarer_infra::config::load_config;
use wayfarer_infra::paths::resolve_data_dir;
use wayfarer_infra::sqlite::kv::SqliteKvStore;
use wayfarer_infra::sqlite::pool::DatabasePool;
use wayfarer_types::config::ClientConfig;

/// Concrete session store type pinned to the SQLite implementation.
pub type ConcreteSessionStore = SessionStore<SqliteKvStore>;

/// Shared application state for all commands.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub session_store: Arc<ConcreteSessionStore>,
    pub chat_backend: Arc<ChatClient>,
    pub search_backend: Arc<SearchClient>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, load config,
    /// open the local store, and build the backend clients.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("wayfarer.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;
        let session_store = SessionStore::new(SqliteKvStore::new(db_pool));

        let chat_backend = ChatClient::new(config.backend.chat_base_url.clone());
        let search_backend = SearchClient::new(config.backend.search_base_url.clone());

        Ok(Self {
            config,
            session_store: Arc::new(session_store),
            chat_backend: Arc::new(chat_backend),
            search_backend: Arc::new(search_backend),
            data_dir,
        })
    }
}
