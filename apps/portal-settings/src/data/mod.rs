//! Data models for settings

pub mod preferences;
pub mod store;

pub use preferences::*;
pub use store::*;
