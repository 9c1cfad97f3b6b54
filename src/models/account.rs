use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued API key, as returned by the key-management endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiKeyRecord {
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    pub key: String,
    pub name: String,
    #[serde(default = "default_status")]
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

fn default_status() -> i32 {
    1
}

/// Aggregate usage counters shown on the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UsageStats {
    pub total_calls: u64,
    pub calls_today: u64,
    pub success_rate: f64,
    pub balance: i64,
}

/// One call-log line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub id: String,
    pub api: String,
    pub method: String,
    pub status_code: u16,
    pub duration_ms: u64,
    pub ip: String,
    pub time: String,
}

/// A page of call logs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogPage {
    pub records: Vec<LogRecord>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
