use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where (and whether) the session survives process restarts:
/// - enabled: if false, the session lives in memory only.
/// - path: location of the durable record on disk.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct SessionStoreConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "auth-storage.json".to_string()
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        SessionStoreConfig {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}
