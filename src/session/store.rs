use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::SessionBackend;
use crate::error::SessionError;
use crate::models::{Identity, PersistedSession, Session};

/// The single source of truth for "is this process authenticated".
///
/// Holds the one `Session` the whole client shares, restores it from the
/// backend at startup, and is the only place the session is ever mutated.
/// A mutex guards the read-modify-write operations; mutations suspend only
/// at the persistence write.
pub struct SessionStore {
    session: Mutex<Session>,
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Opens the store, restoring a prior session from the backend.
    /// Absent or malformed storage yields the empty session; opening
    /// never fails.
    pub async fn open(backend: Arc<dyn SessionBackend>) -> Self {
        let session = match backend.load().await {
            Some(record) => record.into_session(),
            None => Session::empty(),
        };

        if session.authenticated {
            debug!(
                "Restored authenticated session for user '{}'",
                session
                    .identity
                    .as_ref()
                    .map(|i| i.username.as_str())
                    .unwrap_or("<unknown>")
            );
        }

        SessionStore {
            session: Mutex::new(session),
            backend,
        }
    }

    /// Unconditionally overwrites the session with the given credential
    /// and identity, and durably persists the record. The credential's
    /// authenticity is not checked here; that already happened remotely.
    pub async fn login(
        &self,
        credential: impl Into<String>,
        identity: Identity,
    ) -> Result<(), SessionError> {
        let mut session = self.session.lock().await;
        *session = Session::authenticated(credential, identity);
        self.backend.save(&PersistedSession::from(&*session)).await
    }

    /// Clears the session and removes the durable record. Idempotent.
    /// The in-memory session is always cleared, even if the durable
    /// removal fails; that failure is only logged.
    pub async fn logout(&self) {
        let mut session = self.session.lock().await;
        *session = Session::empty();
        if let Err(e) = self.backend.clear().await {
            warn!("Failed to remove durable session record: {}", e);
        }
    }

    /// Replaces the identity only, leaving the credential untouched, and
    /// re-persists so a restart observes the latest identity. Callers are
    /// expected to hold an authenticated session; identity is display
    /// data and carries no authorization weight.
    pub async fn set_identity(&self, identity: Identity) -> Result<(), SessionError> {
        let mut session = self.session.lock().await;
        session.identity = Some(identity);
        self.backend.save(&PersistedSession::from(&*session)).await
    }

    /// A point-in-time copy of the whole session.
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn credential(&self) -> Option<String> {
        self.session.lock().await.credential.clone()
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.session.lock().await.identity.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.authenticated
    }
}
