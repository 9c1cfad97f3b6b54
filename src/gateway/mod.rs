pub mod base;
pub mod navigator;

// Re-export the primary pieces so code outside can do
// "use keygate_client::gateway::{Gateway, Navigator};"
pub use base::Gateway;
pub use navigator::{LoginPrompt, Navigator};
