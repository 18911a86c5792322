//! Application context - dependency injection container

use std::sync::Arc;

use mailtriage_core::{
    AnalysisSession, FeedbackSubmitter, HistoryCache, KeyValueStore, RequestDispatcher,
};
use mailtriage_domain::{Config, Result, StorageConfig};
use mailtriage_infra::{default_data_dir, ClassifierClient, FileKeyValueStore, MemoryKeyValueStore};
use tracing::info;

/// Type alias for key-value store port trait object
type DynKeyValueStore = dyn KeyValueStore + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub client: Arc<ClassifierClient>,
    pub history: Arc<HistoryCache>,
    pub dispatcher: Arc<RequestDispatcher>,
    pub feedback: Arc<FeedbackSubmitter>,
}

impl AppContext {
    /// Wire every service from `config`, choosing the history store from
    /// `config.storage`.
    ///
    /// # Errors
    /// Returns `TriageError::Config` if the base URL is invalid, the HTTP
    /// client cannot be built, or no data directory can be determined.
    pub fn new(config: Config) -> Result<Self> {
        let store = create_store(&config.storage)?;
        Self::with_store(config, store)
    }

    /// Wire every service around an existing history store.
    pub fn with_store(config: Config, store: Arc<DynKeyValueStore>) -> Result<Self> {
        let client = Arc::new(ClassifierClient::from_config(&config.api)?);
        let history = Arc::new(HistoryCache::new(store));
        let dispatcher = Arc::new(RequestDispatcher::new(client.clone()));
        let feedback = Arc::new(FeedbackSubmitter::new(client.clone()));

        info!(
            api = %client.base_url(),
            timeout_secs = ?config.api.timeout_secs,
            ephemeral_history = config.storage.ephemeral,
            "Application context initialised"
        );

        Ok(Self { config, client, history, dispatcher, feedback })
    }

    /// Fresh analysis session sharing this context's dispatcher and history.
    pub fn session(&self) -> AnalysisSession {
        AnalysisSession::new(Arc::clone(&self.dispatcher), Arc::clone(&self.history))
    }
}

fn create_store(storage: &StorageConfig) -> Result<Arc<DynKeyValueStore>> {
    if storage.ephemeral {
        return Ok(Arc::new(MemoryKeyValueStore::new()));
    }

    let dir = match &storage.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    info!(data_dir = %dir.display(), "Using file-backed history");
    Ok(Arc::new(FileKeyValueStore::new(dir)))
}
