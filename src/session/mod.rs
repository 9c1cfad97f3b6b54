pub mod backend;
pub mod file_backend;
pub mod memory_backend;
pub mod store;

// Re-export the primary pieces so code outside can do
// "use keygate_client::session::{SessionStore, create_backend};"
pub use backend::{create_backend, SessionBackend};
pub use store::SessionStore;
