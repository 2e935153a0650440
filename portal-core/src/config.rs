//! Portal configuration value
//!
//! The base URL, streaming mode and application id a panel persists between
//! sessions. Absent, empty or unknown values fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::catalog::{AppId, ApplicationCatalog};
use crate::link::{build_invite_link, ArgumentStyle, LinkRequest};
use crate::mode::StreamingMode;

/// Placeholder domain shown until the user enters their portal's domain
pub const DEFAULT_BASE_URL: &str = "https://[yourcompany].innoactive.io";

pub const DEFAULT_MODE: StreamingMode = StreamingMode::Browser;

/// Id of the first built-in application
pub const DEFAULT_APP_ID: &str = "7b0b754a-b90b-4d3b-a043-d9a72f1e4d7f";

/// Persisted panel configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub base_url: String,
    pub mode: StreamingMode,
    pub app_id: AppId,
    #[serde(default)]
    pub argument_style: ArgumentStyle,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: DEFAULT_MODE,
            app_id: AppId::from(DEFAULT_APP_ID),
            argument_style: ArgumentStyle::default(),
        }
    }
}

impl PortalConfig {
    /// Defaults, with the catalog's first entry as the application
    pub fn default_for(catalog: &ApplicationCatalog) -> Self {
        let mut config = Self::default();
        if let Some(app) = catalog.default_app() {
            config.app_id = app.id.clone();
        }
        config
    }

    /// Build a config from raw stored strings.
    ///
    /// Modes may be stored in technical or label form. Missing or empty
    /// values, unknown modes and app ids absent from `catalog` are replaced
    /// by defaults.
    pub fn from_raw(
        base_url: Option<&str>,
        render_mode: Option<&str>,
        app_id: Option<&str>,
        catalog: &ApplicationCatalog,
    ) -> Self {
        let defaults = Self::default_for(catalog);

        let base_url = match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => defaults.base_url,
        };

        let mode = match render_mode.filter(|m| !m.is_empty()) {
            Some(raw) => raw.parse::<StreamingMode>().unwrap_or_else(|_| {
                log::warn!("Stored render mode '{}' is unknown, using default", raw);
                defaults.mode
            }),
            None => defaults.mode,
        };

        let config = Self {
            base_url,
            mode,
            app_id: app_id.map(AppId::from).unwrap_or_default(),
            argument_style: defaults.argument_style,
        };
        config.sanitized(catalog)
    }

    /// Replace an empty base URL or an app id missing from `catalog`
    pub fn sanitized(mut self, catalog: &ApplicationCatalog) -> Self {
        let defaults = Self::default_for(catalog);

        if self.base_url.trim().is_empty() {
            self.base_url = defaults.base_url;
        }

        if self.app_id.is_empty() {
            self.app_id = defaults.app_id;
        } else if catalog.find(&self.app_id).is_none() {
            log::warn!(
                "Stored application id '{}' is not in the catalog, using default",
                self.app_id
            );
            self.app_id = defaults.app_id;
        }

        self
    }

    /// True while the base URL is still the placeholder domain
    pub fn has_default_base_url(&self) -> bool {
        self.base_url == DEFAULT_BASE_URL
    }

    pub fn link_request<'a>(&'a self, file_reference: &'a str) -> LinkRequest<'a> {
        LinkRequest {
            base_url: &self.base_url,
            app_id: &self.app_id,
            mode: self.mode,
            file_reference,
            style: self.argument_style,
        }
    }

    /// Sharing link for `file_reference` under this config
    pub fn link_for(&self, file_reference: &str) -> String {
        self.link_request(file_reference).to_link()
    }

    pub fn invite_link(&self) -> String {
        build_invite_link(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();

        assert_eq!(config.base_url, "https://[yourcompany].innoactive.io");
        assert_eq!(config.mode.technical(), "cloud/browser");
        assert_eq!(config.app_id.as_str(), DEFAULT_APP_ID);
        assert_eq!(config.argument_style, ArgumentStyle::UsdFlag);
        assert!(config.has_default_base_url());
    }

    #[test]
    fn test_default_for_legacy_catalog() {
        let config = PortalConfig::default_for(&ApplicationCatalog::legacy());
        assert_eq!(config.app_id.as_str(), "3757");
    }

    #[test]
    fn test_from_raw_all_present() {
        let config = PortalConfig::from_raw(
            Some("https://acme.innoactive.io"),
            Some("cloud/standalone"),
            Some("48d5be05-49af-41d3-a383-942ebc377c59"),
            &ApplicationCatalog::builtin(),
        );

        assert_eq!(config.base_url, "https://acme.innoactive.io");
        assert_eq!(config.mode, StreamingMode::Xr);
        assert_eq!(config.app_id.as_str(), "48d5be05-49af-41d3-a383-942ebc377c59");
        assert!(!config.has_default_base_url());
    }

    #[test]
    fn test_from_raw_missing_and_empty_use_defaults() {
        let catalog = ApplicationCatalog::builtin();

        let missing = PortalConfig::from_raw(None, None, None, &catalog);
        assert_eq!(missing, PortalConfig::default());

        let empty = PortalConfig::from_raw(Some(""), Some(""), Some(""), &catalog);
        assert_eq!(empty, PortalConfig::default());
    }

    #[test]
    fn test_from_raw_unknown_values_use_defaults() {
        let config = PortalConfig::from_raw(
            Some("https://acme.io"),
            Some("cloud/hologram"),
            Some("3757"),
            &ApplicationCatalog::builtin(),
        );

        assert_eq!(config.base_url, "https://acme.io");
        assert_eq!(config.mode, DEFAULT_MODE);
        assert_eq!(config.app_id.as_str(), DEFAULT_APP_ID);
    }

    #[test]
    fn test_from_raw_accepts_mode_labels() {
        let catalog = ApplicationCatalog::builtin();

        for (raw, expected) in [
            ("XR", StreamingMode::Xr),
            ("VR", StreamingMode::Xr),
            ("local", StreamingMode::Local),
            ("browser", StreamingMode::Browser),
        ] {
            let config = PortalConfig::from_raw(None, Some(raw), None, &catalog);
            assert_eq!(config.mode, expected, "stored mode {raw}");
        }
    }

    #[test]
    fn test_link_for_uses_all_fields() {
        let config = PortalConfig {
            base_url: "https://acme.io".to_string(),
            mode: StreamingMode::Local,
            app_id: AppId::from("abc"),
            argument_style: ArgumentStyle::BarePath,
        };

        assert_eq!(
            config.link_for("omniverse://h/s.usd"),
            "https://acme.io/apps/abc/launch/local/windows?args=omniverse%3A%2F%2Fh%2Fs.usd"
        );
        assert_eq!(
            config.invite_link(),
            "https://acme.io/control-panel/v2/users"
        );
    }

    #[test]
    fn test_deserialization_without_argument_style() {
        let json = r#"{
            "base_url": "https://acme.io",
            "mode": "local/windows",
            "app_id": "1501"
        }"#;

        let config: PortalConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.mode, StreamingMode::Local);
        assert_eq!(config.argument_style, ArgumentStyle::UsdFlag);
    }
}
