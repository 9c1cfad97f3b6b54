pub mod account;
pub mod identity;

// Re-export the record types so code outside can do
// "use keygate_client::models::{Identity, Session};"
pub use account::{ApiKeyRecord, LogPage, LogRecord, UsageStats};
pub use identity::{Identity, PersistedSession, Session};
