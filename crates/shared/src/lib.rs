//! # menuflow Shared
//!
//! Common types used across all menuflow crates: player identities, the
//! action error taxonomy, the diagnostics sink and engine configuration.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ids;

// Re-exports
pub use config::*;
pub use diagnostics::*;
pub use error::*;
pub use ids::*;
