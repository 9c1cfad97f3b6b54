use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{file_backend::FileBackend, memory_backend::MemoryBackend};
use crate::config::SessionStoreConfig;
use crate::error::SessionError;
use crate::models::PersistedSession;

/// The SessionBackend trait abstracts where the durable session record
/// lives (load, save, clear).
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Absent or unreadable storage yields `None`; restoring never fails.
    async fn load(&self) -> Option<PersistedSession>;
    async fn save(&self, record: &PersistedSession) -> Result<(), SessionError>;
    /// Removing an already-absent record is a no-op.
    async fn clear(&self) -> Result<(), SessionError>;
    fn is_durable(&self) -> bool {
        // Default implementation should return always true for real backends.
        // The in-memory backend returns false so callers can warn about it.
        true
    }
}

/// Creates a concrete backend based on the SessionStoreConfig.
/// If `session.enabled = false`, the session lives in memory only.
pub fn create_backend(config: &SessionStoreConfig) -> Arc<dyn SessionBackend> {
    if !config.enabled {
        info!("Durable session storage is disabled. Using in-memory backend.");
        return Arc::new(MemoryBackend::new());
    }

    Arc::new(FileBackend::new(&config.path))
}
