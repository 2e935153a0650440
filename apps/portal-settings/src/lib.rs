//! Portal Settings - Persistent preferences for the portal panel
//!
//! Stores the base URL, streaming mode, runtime and user-registered
//! runtimes as JSON in the user's home directory.

pub mod data;
pub mod error;

pub use data::{JsonSettingsStore, Preferences};
pub use error::{SettingsError, SettingsResult};
