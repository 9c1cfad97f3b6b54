use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::SessionBackend;
use crate::error::SessionError;
use crate::models::PersistedSession;

/// A concrete `SessionBackend` that keeps the record as a JSON file
/// under a fixed, configurable path.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }
}

#[async_trait]
impl SessionBackend for FileBackend {
    async fn load(&self) -> Option<PersistedSession> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read session record at {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => {
                debug!("Loaded session record from {:?}", self.path);
                Some(record)
            }
            Err(e) => {
                warn!(
                    "Session record at {:?} is malformed, starting empty: {}",
                    self.path, e
                );
                None
            }
        }
    }

    async fn save(&self, record: &PersistedSession) -> Result<(), SessionError> {
        let body = serde_json::to_vec_pretty(record).map_err(SessionError::Encode)?;
        tokio::fs::write(&self.path, body).await?;
        debug!("Wrote session record to {:?}", self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identity, Session};

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("keygate-session-{}.json", uuid::Uuid::new_v4()))
    }

    /// Save, load and clear against a real file.
    #[tokio::test]
    async fn test_save_load_clear() {
        let backend = FileBackend::new(scratch_path());
        let record = PersistedSession::from(&Session::authenticated(
            "tok123",
            Identity::new("1", "alice", "a@x.com"),
        ));

        backend.save(&record).await.expect("save should succeed");
        assert_eq!(backend.load().await, Some(record));

        backend.clear().await.expect("clear should succeed");
        assert_eq!(backend.load().await, None);
    }

    /// A missing file restores to nothing, without error.
    #[tokio::test]
    async fn test_load_missing_file() {
        let backend = FileBackend::new(scratch_path());
        assert_eq!(backend.load().await, None);
    }

    /// A corrupt file restores to nothing instead of failing startup.
    #[tokio::test]
    async fn test_load_malformed_file() {
        let path = scratch_path();
        tokio::fs::write(&path, b"{not json").await.unwrap();
        let backend = FileBackend::new(&path);
        assert_eq!(backend.load().await, None);
        tokio::fs::remove_file(&path).await.ok();
    }

    /// Clearing an already-absent record is a no-op.
    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let backend = FileBackend::new(scratch_path());
        backend.clear().await.expect("first clear should succeed");
        backend.clear().await.expect("second clear should succeed");
    }
}
