use serde_json::{json, Value};
use tracing::info;

use super::Client;
use crate::error::Error;
use crate::models::ApiKeyRecord;

impl Client {
    /// All keys belonging to the signed-in account.
    pub async fn api_keys(&self) -> Result<Vec<ApiKeyRecord>, Error> {
        self.gateway.get("/user/apikeys").await
    }

    /// Issues a new key under the given display name.
    pub async fn create_api_key(&self, name: &str) -> Result<ApiKeyRecord, Error> {
        let record: ApiKeyRecord = self
            .gateway
            .post("/user/apikeys", &json!({"name": name}))
            .await?;
        info!("Created API key '{}' (id {})", record.name, record.id);
        Ok(record)
    }

    /// Revokes a key by id.
    pub async fn delete_api_key(&self, id: u64) -> Result<(), Error> {
        let _: Value = self
            .gateway
            .delete(&format!("/user/apikeys/{}", id))
            .await?;
        info!("Deleted API key {}", id);
        Ok(())
    }
}
