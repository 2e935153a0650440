//! JSON-file backed settings store for the panel

use std::path::{Path, PathBuf};

use portal_core::{ApplicationCatalog, PortalConfig};
use portal_ui::{CollaboratorError, SettingsStore};

use super::preferences::Preferences;
use crate::error::SettingsError;

/// Settings store writing [`Preferences`] to a JSON file
#[derive(Clone, Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    legacy_catalog: bool,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            legacy_catalog: false,
        }
    }

    /// Store at [`Preferences::get_preferences_path`]
    pub fn at_default_path() -> Self {
        Self::new(Preferences::get_preferences_path())
    }

    /// Resolve stored app ids against the legacy numeric catalog
    pub fn with_legacy_catalog(mut self, legacy: bool) -> Self {
        self.legacy_catalog = legacy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferences(&self) -> Result<Preferences, SettingsError> {
        Preferences::load_from(&self.path)
    }

    /// Catalog the stored app id is resolved against
    pub fn catalog(&self) -> ApplicationCatalog {
        Preferences::load_or_default(&self.path).catalog(self.legacy_catalog)
    }
}

impl From<SettingsError> for CollaboratorError {
    fn from(e: SettingsError) -> Self {
        CollaboratorError::Settings(e.to_string())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<PortalConfig>, CollaboratorError> {
        let prefs = self.preferences()?;
        if prefs.is_unset() {
            return Ok(None);
        }
        let catalog = prefs.catalog(self.legacy_catalog);
        Ok(Some(prefs.to_config(&catalog)))
    }

    fn save(&self, config: &PortalConfig) -> Result<(), CollaboratorError> {
        // Keep custom runtimes from the file; a corrupt file is overwritten
        let mut prefs = Preferences::load_or_default(&self.path);
        prefs.apply_config(config);
        prefs.save_to(&self.path)?;
        Ok(())
    }
}
