pub mod apikeys;
pub mod auth;
pub mod user;

pub use auth::CodePurpose;

use std::sync::Arc;

use crate::config::{ApiConfig, ConfigV1};
use crate::error::Error;
use crate::gateway::{Gateway, Navigator};
use crate::session::{create_backend, SessionStore};

/// The typed face of the remote service. One `Client` owns the gateway
/// and shares the session store with whoever else needs to read it;
/// endpoint groups live in the submodules (auth, API keys, user).
pub struct Client {
    pub(crate) gateway: Gateway,
    pub(crate) session: Arc<SessionStore>,
}

impl Client {
    /// Wires the full stack from config: backend, session store, gateway.
    pub async fn from_config(
        config: &ConfigV1,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, Error> {
        let backend = create_backend(&config.session);
        let session = Arc::new(SessionStore::open(backend).await);
        Client::new(&config.api, session, navigator)
    }

    pub fn new(
        api: &ApiConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, Error> {
        let gateway = Gateway::new(api, session.clone(), navigator)?;
        Ok(Client { gateway, session })
    }

    /// Read access to the session, for surfaces that display it.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
