//! # DVNC Shared
//!
//! Common types and interfaces used across all DVNC packages.

pub mod error;
pub mod domain;
pub mod insight;
pub mod config;

// Re-exports
pub use error::*;
pub use domain::*;
pub use insight::*;
pub use config::*;
