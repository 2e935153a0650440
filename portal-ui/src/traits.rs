//! Host Collaborator Traits
//!
//! The panel never touches the host application or the operating system
//! directly. Hosts hand it implementations of these traits instead.
//!
//! ## Traits Overview
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `StageAccessor` | Report the file loaded in the host's scene |
//! | `Clipboard` | Copy text to the system clipboard |
//! | `Browser` | Open a URL in the default browser |
//! | `SettingsStore` | Load and save [`PortalConfig`] |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portal_ui::{Clipboard, CollaboratorError};
//!
//! struct XclipClipboard;
//!
//! impl Clipboard for XclipClipboard {
//!     fn copy_text(&self, text: &str) -> Result<(), CollaboratorError> {
//!         // pipe `text` into `xclip -selection clipboard`
//!         Ok(())
//!     }
//! }
//! ```

use parking_lot::Mutex;
use portal_core::PortalConfig;
use thiserror::Error;

/// Failure reported by a host collaborator. Surfaced as a warning, never
/// escalated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("could not open browser: {0}")]
    Browser(String),

    #[error("could not read stage: {0}")]
    Stage(String),

    #[error("settings store: {0}")]
    Settings(String),
}

/// Access to the scene currently loaded in the host application.
pub trait StageAccessor {
    /// Path of the root layer's file, or `None` when nothing is loaded
    fn current_file(&self) -> Result<Option<String>, CollaboratorError>;
}

/// System clipboard.
pub trait Clipboard {
    fn copy_text(&self, text: &str) -> Result<(), CollaboratorError>;
}

/// Default web browser. Opening is fire-and-forget; only launch failures
/// are reported.
pub trait Browser {
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError>;
}

/// Persistent storage for the panel configuration.
pub trait SettingsStore {
    /// Stored config, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<PortalConfig>, CollaboratorError>;

    fn save(&self, config: &PortalConfig) -> Result<(), CollaboratorError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn load(&self) -> Result<Option<PortalConfig>, CollaboratorError> {
        (**self).load()
    }

    fn save(&self, config: &PortalConfig) -> Result<(), CollaboratorError> {
        (**self).save(config)
    }
}

/// Settings store that keeps the config in memory.
///
/// Used by hosts without persistent storage and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: Mutex<Option<PortalConfig>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PortalConfig) -> Self {
        Self {
            config: Mutex::new(Some(config)),
            saves: Mutex::new(0),
        }
    }

    /// Last saved (or initial) config
    pub fn config(&self) -> Option<PortalConfig> {
        self.config.lock().clone()
    }

    /// Number of times `save` was called
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<PortalConfig>, CollaboratorError> {
        Ok(self.config.lock().clone())
    }

    fn save(&self, config: &PortalConfig) -> Result<(), CollaboratorError> {
        *self.config.lock() = Some(config.clone());
        *self.saves.lock() += 1;
        Ok(())
    }
}
