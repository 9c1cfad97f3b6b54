use std::sync::Mutex;

use async_trait::async_trait;

use super::SessionBackend;
use crate::error::SessionError;
use crate::models::PersistedSession;

/// A backend that keeps the record in memory only. Selected when durable
/// storage is disabled; the session then lasts exactly one process run.
pub struct MemoryBackend {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            slot: Mutex::new(None),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn load(&self) -> Option<PersistedSession> {
        self.slot.lock().expect("session slot mutex poisoned").clone()
    }

    async fn save(&self, record: &PersistedSession) -> Result<(), SessionError> {
        *self.slot.lock().expect("session slot mutex poisoned") = Some(record.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.slot.lock().expect("session slot mutex poisoned") = None;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}
