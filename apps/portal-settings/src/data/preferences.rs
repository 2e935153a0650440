//! User preferences storage

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use portal_core::{AppId, ApplicationCatalog, ApplicationTarget, ArgumentStyle, PortalConfig};

use crate::error::SettingsResult;

/// User preferences for the portal panel
///
/// Values are kept as the raw stored strings; [`Preferences::to_config`]
/// turns them into a validated [`PortalConfig`].
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    pub base_url: String,
    /// Technical form of the streaming mode, e.g. `cloud/browser`
    #[serde(default)]
    pub render_mode: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub argument_style: ArgumentStyle,
    /// Runtimes registered by the user
    #[serde(default)]
    pub custom_apps: Vec<ApplicationTarget>,
}

impl Preferences {
    /// Get the preferences file path
    pub fn get_preferences_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".innoactive")
            .join("portal")
            .join("preferences.json")
    }

    /// Load preferences from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load preferences from `path`, or defaults if it cannot be read
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Failed to load preferences from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load preferences from the default location
    pub fn load() -> Self {
        Self::load_or_default(&Self::get_preferences_path())
    }

    /// Save preferences to `path`
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("Preferences saved to {}", path.display());

        Ok(())
    }

    /// Save preferences to the default location
    pub fn save(&self) -> SettingsResult<()> {
        self.save_to(&Self::get_preferences_path())
    }

    /// Built-in (or legacy) runtimes followed by the user's own
    pub fn catalog(&self, legacy: bool) -> ApplicationCatalog {
        let mut catalog = if legacy {
            ApplicationCatalog::legacy()
        } else {
            ApplicationCatalog::builtin()
        };
        for app in &self.custom_apps {
            catalog.upsert(app.clone());
        }
        catalog
    }

    /// Config from the stored values, with defaults filled in
    pub fn to_config(&self, catalog: &ApplicationCatalog) -> PortalConfig {
        let mut config = PortalConfig::from_raw(
            Some(&self.base_url),
            Some(&self.render_mode),
            Some(&self.app_id),
            catalog,
        );
        config.argument_style = self.argument_style;
        config
    }

    /// Overwrite the stored values with `config`
    pub fn apply_config(&mut self, config: &PortalConfig) {
        self.base_url = config.base_url.clone();
        self.render_mode = config.mode.technical().to_string();
        self.app_id = config.app_id.to_string();
        self.argument_style = config.argument_style;
    }

    /// True if nothing has been stored yet
    pub fn is_unset(&self) -> bool {
        self.base_url.is_empty() && self.render_mode.is_empty() && self.app_id.is_empty()
    }

    /// Get a custom runtime by ID
    pub fn get_custom_app(&self, id: &AppId) -> Option<&ApplicationTarget> {
        self.custom_apps.iter().find(|a| &a.id == id)
    }

    /// Update or insert a custom runtime
    pub fn upsert_custom_app(&mut self, name: impl Into<String>, id: impl Into<AppId>) {
        let app = ApplicationTarget::new_custom(name, id);
        if let Some(existing) = self.custom_apps.iter_mut().find(|a| a.id == app.id) {
            *existing = app;
        } else {
            self.custom_apps.push(app);
        }
    }

    /// Remove a custom runtime
    pub fn remove_custom_app(&mut self, id: &AppId) -> bool {
        if let Some(pos) = self.custom_apps.iter().position(|a| &a.id == id) {
            self.custom_apps.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{StreamingMode, DEFAULT_APP_ID, DEFAULT_BASE_URL};

    #[test]
    fn test_preferences_default() {
        let prefs = Preferences::default();

        assert!(prefs.is_unset());
        assert!(prefs.custom_apps.is_empty());
        assert_eq!(prefs.argument_style, ArgumentStyle::UsdFlag);
    }

    #[test]
    fn test_get_preferences_path() {
        let path = Preferences::get_preferences_path();

        // Should end with the expected path components
        assert!(path.ends_with(".innoactive/portal/preferences.json"));
    }

    #[test]
    fn test_to_config_defaults_when_unset() {
        let prefs = Preferences::default();
        let config = prefs.to_config(&ApplicationCatalog::builtin());

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.mode, StreamingMode::Browser);
        assert_eq!(config.app_id.as_str(), DEFAULT_APP_ID);
    }

    #[test]
    fn test_to_config_uses_stored_values() {
        let prefs = Preferences {
            base_url: "https://acme.innoactive.io".to_string(),
            render_mode: "local/windows".to_string(),
            app_id: "0a7b7798-123e-4158-ad66-a09e255a2400".to_string(),
            argument_style: ArgumentStyle::BarePath,
            custom_apps: Vec::new(),
        };
        let config = prefs.to_config(&ApplicationCatalog::builtin());

        assert_eq!(config.base_url, "https://acme.innoactive.io");
        assert_eq!(config.mode, StreamingMode::Local);
        assert_eq!(config.app_id.as_str(), "0a7b7798-123e-4158-ad66-a09e255a2400");
        assert_eq!(config.argument_style, ArgumentStyle::BarePath);
    }

    #[test]
    fn test_apply_config_stores_technical_mode() {
        let mut prefs = Preferences::default();
        let mut config = PortalConfig::default();
        config.mode = StreamingMode::Xr;

        prefs.apply_config(&config);

        assert_eq!(prefs.render_mode, "cloud/standalone");
        assert_eq!(prefs.base_url, DEFAULT_BASE_URL);
        assert_eq!(prefs.app_id, DEFAULT_APP_ID);
        assert!(!prefs.is_unset());
    }

    #[test]
    fn test_catalog_includes_custom_apps() {
        let mut prefs = Preferences::default();
        prefs.upsert_custom_app("Factory Viewer", "f00d");

        let catalog = prefs.catalog(false);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.find(&AppId::from("f00d")).unwrap().is_custom);

        let legacy = prefs.catalog(true);
        assert_eq!(legacy.len(), 3);
        assert_eq!(legacy.apps()[0].id.as_str(), "3757");
    }

    #[test]
    fn test_custom_app_selected_from_stored_id() {
        let mut prefs = Preferences::default();
        prefs.upsert_custom_app("Factory Viewer", "f00d");
        prefs.app_id = "f00d".to_string();

        let config = prefs.to_config(&prefs.catalog(false));
        assert_eq!(config.app_id.as_str(), "f00d");
    }

    #[test]
    fn test_upsert_custom_app_update() {
        let mut prefs = Preferences::default();
        prefs.upsert_custom_app("Viewer", "f00d");
        prefs.upsert_custom_app("Viewer 2", "f00d");

        assert_eq!(prefs.custom_apps.len(), 1);
        assert_eq!(
            prefs.get_custom_app(&AppId::from("f00d")).map(|a| a.name.as_str()),
            Some("Viewer 2")
        );
    }

    #[test]
    fn test_remove_custom_app() {
        let mut prefs = Preferences::default();
        prefs.upsert_custom_app("Viewer", "f00d");

        assert!(prefs.remove_custom_app(&AppId::from("f00d")));
        assert!(!prefs.remove_custom_app(&AppId::from("f00d")));
        assert!(prefs.custom_apps.is_empty());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.base_url = "https://acme.innoactive.io".to_string();
        prefs.upsert_custom_app("Viewer", "f00d");
        prefs.save_to(&path).unwrap();

        let restored = Preferences::load_from(&path).unwrap();
        assert_eq!(restored, prefs);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(Preferences::load_from(&path).unwrap(), Preferences::default());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(Preferences::load_from(&path).is_err());
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }

    #[test]
    fn test_deserialization_with_missing_fields() {
        // Files written before custom runtimes existed
        let json = r#"{
            "base_url": "https://acme.innoactive.io",
            "render_mode": "cloud/browser",
            "app_id": "7b0b754a-b90b-4d3b-a043-d9a72f1e4d7f"
        }"#;

        let prefs: Preferences = serde_json::from_str(json).unwrap();

        assert!(prefs.custom_apps.is_empty());
        assert_eq!(prefs.argument_style, ArgumentStyle::UsdFlag);
    }
}
