//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod answers;
pub mod audit;
pub mod health;
pub mod profile;

// Re-export all handlers for use in router
pub use answers::*;
pub use audit::*;
pub use health::*;
pub use profile::*;
