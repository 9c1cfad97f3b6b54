use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keygate_client::api::Client;
use keygate_client::config::ApiConfig;
use keygate_client::gateway::Navigator;
use keygate_client::session::{SessionBackend, SessionStore};

/// A navigator that only counts how often the gateway sent it to login.
pub struct RecordingNavigator {
    hits: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingNavigator {
            hits: AtomicUsize::new(0),
        })
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

/// A unique scratch file for durable-session tests.
pub fn scratch_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("keygate-{}-{}.json", tag, uuid::Uuid::new_v4()))
}

/// A client over the given backend, pointed at a mock server.
pub async fn build_client(
    base_url: String,
    backend: Arc<dyn SessionBackend>,
) -> (Client, Arc<SessionStore>, Arc<RecordingNavigator>) {
    let session = Arc::new(SessionStore::open(backend).await);
    let navigator = RecordingNavigator::new();
    let client = Client::new(
        &ApiConfig {
            base_url,
            timeout_in_ms: 2000,
        },
        session.clone(),
        navigator.clone(),
    )
    .expect("client should build");
    (client, session, navigator)
}
