use serde_json::{json, Value};

use super::Client;
use crate::error::Error;
use crate::models::{Identity, LogPage, UsageStats};

impl Client {
    /// Fetches the account profile and refreshes the cached identity.
    pub async fn profile(&self) -> Result<Identity, Error> {
        let identity: Identity = self.gateway.get("/user/profile").await?;
        self.session.set_identity(identity.clone()).await?;
        Ok(identity)
    }

    /// Changes the account password. The current token stays valid.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        let _: Value = self
            .gateway
            .post(
                "/user/password",
                &json!({"old_password": old_password, "new_password": new_password}),
            )
            .await?;
        Ok(())
    }

    /// Aggregate usage counters for the dashboard.
    pub async fn usage(&self) -> Result<UsageStats, Error> {
        self.gateway.get("/user/usage").await
    }

    /// One page of call logs.
    pub async fn logs(&self, page: u32, limit: u32) -> Result<LogPage, Error> {
        self.gateway
            .get(&format!("/user/logs?page={}&limit={}", page, limit))
            .await
    }
}
