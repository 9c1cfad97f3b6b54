use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::Navigator;
use crate::config::ApiConfig;
use crate::error::{ApiFailure, Error};
use crate::session::SessionStore;

/// The `{code, message, data}` wrapper every service response arrives in.
/// Callers of the gateway only ever see `data`.
#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

/// The one path every outbound call takes: attaches the stored credential,
/// applies the uniform timeout, unwraps the response envelope, and reacts
/// to authorization failures by clearing the session and redirecting.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl Gateway {
    pub fn new(
        config: &ApiConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .default_headers(headers)
            .build()?;

        Ok(Gateway {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.dispatch(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        self.dispatch(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.dispatch(Method::DELETE, path, None).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        // The credential is read once, here. A session change while this
        // request is in flight affects only the next call.
        if let Some(credential) = self.session.credential().await {
            request = request.header(AUTHORIZATION, format!("Bearer {}", credential));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!("Dispatching {} {}", method, url);
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // The session must be cleared before the caller sees the
            // error, so its error handler observes the cleared state.
            warn!("{} {} answered 401; clearing session", method, url);
            self.session.logout().await;
            self.navigator.to_login();
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let failure = response
                .json::<ApiFailure>()
                .await
                .unwrap_or_else(|_| ApiFailure::generic(status.as_u16()));
            debug!("{} {} rejected: {}", method, url, failure);
            return Err(Error::Rejected(failure));
        }

        let envelope = response.json::<Envelope>().await?;
        debug!(
            "{} {} succeeded (code={}, message='{}')",
            method, url, envelope.code, envelope.message
        );
        serde_json::from_value(envelope.data).map_err(Error::from)
    }
}
