//! Portal panel controller
//!
//! Owns the form state behind the panel (file reference, runtime, streaming
//! mode, base URL) and keeps the sharing link in sync with it. Every setter
//! re-derives the link before returning, so the link a host reads is never
//! older than the latest input.
//!
//! ## Flow
//!
//! ```text
//! widget change ──▶ setter ──▶ refresh link ──▶ save settings
//!                                   │
//! Copy / Test / Invite ──▶ validate ┴──▶ collaborator ──▶ notification
//! ```

use portal_core::{
    validate_form, validate_reference, AppId, ApplicationCatalog, ArgumentStyle, LinkError,
    LinkResult, PortalConfig, StreamingMode, ValidationResult, DEFAULT_BASE_URL,
};

use crate::notification::NotificationBoard;
use crate::traits::{Browser, Clipboard, CollaboratorError, SettingsStore, StageAccessor};

pub const STAGE_FILE_WARNING: &str =
    "Please load a valid omniverse:// or http(s):// USD file URL to your stage.";
pub const LINK_COPIED: &str = "Sharing link copied to clipboard.";
pub const LINK_OPENED: &str = "Sharing link opened in browser.";
pub const INVITE_OPENED: &str = "Invite page opened in browser.";

/// Form state and actions of the portal panel
pub struct PortalPanel<S: SettingsStore> {
    store: S,
    catalog: ApplicationCatalog,
    config: PortalConfig,
    reference: String,
    sharing_link: String,
    autosave: bool,
    notifications: NotificationBoard,
}

impl<S: SettingsStore> PortalPanel<S> {
    /// Create a panel from the stored settings.
    ///
    /// Unreadable or invalid settings fall back to defaults.
    pub fn new(store: S, catalog: ApplicationCatalog) -> Self {
        let config = match store.load() {
            Ok(Some(config)) => config.sanitized(&catalog),
            Ok(None) => PortalConfig::default_for(&catalog),
            Err(e) => {
                log::warn!("Failed to load portal settings, using defaults: {}", e);
                PortalConfig::default_for(&catalog)
            }
        };
        log::debug!("Render mode: {}", config.mode.technical());

        let mut panel = Self {
            store,
            catalog,
            config,
            reference: String::new(),
            sharing_link: String::new(),
            autosave: true,
            notifications: NotificationBoard::new(),
        };
        panel.refresh_link();
        panel
    }

    /// Save settings after each change (default: on)
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_notifications(mut self, notifications: NotificationBoard) -> Self {
        self.notifications = notifications;
        self
    }

    // --- Accessors ---

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ApplicationCatalog {
        &self.catalog
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Link for the current form state
    pub fn sharing_link(&self) -> &str {
        &self.sharing_link
    }

    pub fn notifications(&self) -> &NotificationBoard {
        &self.notifications
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dropdown index of the selected mode
    pub fn mode_index(&self) -> usize {
        self.config.mode.index()
    }

    /// Dropdown index of the selected runtime
    pub fn app_index(&self) -> Option<usize> {
        self.catalog.position(&self.config.app_id)
    }

    // --- Form changes ---

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
        self.on_changed();
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.config.base_url = base_url.into();
        self.on_changed();
    }

    pub fn set_mode(&mut self, mode: StreamingMode) {
        self.config.mode = mode;
        self.on_changed();
    }

    /// Select the mode at a dropdown index
    pub fn select_mode(&mut self, index: usize) -> LinkResult<()> {
        let mode = StreamingMode::ALL
            .get(index)
            .copied()
            .ok_or(LinkError::IndexOutOfRange {
                index,
                len: StreamingMode::ALL.len(),
            })?;
        self.set_mode(mode);
        Ok(())
    }

    /// Select the runtime at a dropdown index
    pub fn select_app(&mut self, index: usize) -> LinkResult<()> {
        self.config.app_id = self.catalog.get(index)?.id.clone();
        self.on_changed();
        Ok(())
    }

    /// Select a runtime by id. The id must be in the catalog.
    pub fn set_app_id(&mut self, app_id: &AppId) -> LinkResult<()> {
        if self.catalog.find(app_id).is_none() {
            return Err(LinkError::UnknownApplication(app_id.to_string()));
        }
        self.config.app_id = app_id.clone();
        self.on_changed();
        Ok(())
    }

    pub fn set_argument_style(&mut self, style: ArgumentStyle) {
        self.config.argument_style = style;
        self.on_changed();
    }

    /// Take the file currently loaded in the host's stage.
    ///
    /// Non-shareable files clear the reference. The warning is skipped when
    /// called while the panel is starting up.
    pub fn use_stage_file(&mut self, stage: &dyn StageAccessor, at_autoload: bool) -> bool {
        let file = match stage.current_file() {
            Ok(file) => file.unwrap_or_default(),
            Err(e) => {
                log::debug!("Stage lookup failed: {}", e);
                String::new()
            }
        };

        if validate_reference(&file) {
            self.set_reference(file);
            true
        } else {
            if !at_autoload {
                self.notifications.warn(STAGE_FILE_WARNING);
            }
            self.set_reference(String::new());
            false
        }
    }

    // --- Actions ---

    /// Validate the form, posting a warning on failure
    pub fn validate(&self) -> ValidationResult {
        let result = validate_form(&self.reference, &self.config.base_url, DEFAULT_BASE_URL);
        if let Err(e) = result {
            self.notifications.warn(e.to_string());
        }
        result
    }

    /// Copy the sharing link. Returns true on success.
    pub fn copy_link(&self, clipboard: &dyn Clipboard) -> bool {
        if self.validate().is_err() {
            return false;
        }
        match clipboard.copy_text(&self.sharing_link) {
            Ok(()) => {
                self.notifications.info(LINK_COPIED);
                true
            }
            Err(e) => {
                self.report_failure(&e);
                false
            }
        }
    }

    /// Open the sharing link to test it locally
    pub fn open_link(&self, browser: &dyn Browser) -> bool {
        if self.validate().is_err() {
            return false;
        }
        match browser.open_url(&self.sharing_link) {
            Ok(()) => {
                self.notifications.info(LINK_OPENED);
                true
            }
            Err(e) => {
                self.report_failure(&e);
                false
            }
        }
    }

    /// Open the portal page for inviting users
    pub fn open_invite(&self, browser: &dyn Browser) -> bool {
        if self.validate().is_err() {
            return false;
        }
        match browser.open_url(&self.config.invite_link()) {
            Ok(()) => {
                self.notifications.info(INVITE_OPENED);
                true
            }
            Err(e) => {
                self.report_failure(&e);
                false
            }
        }
    }

    /// Write the current config to the store
    pub fn save_settings(&self) -> Result<(), CollaboratorError> {
        self.store.save(&self.config)
    }

    fn on_changed(&mut self) {
        self.refresh_link();
        if self.autosave {
            if let Err(e) = self.save_settings() {
                log::warn!("Failed to save portal settings: {}", e);
            }
        }
    }

    fn refresh_link(&mut self) {
        self.sharing_link = self.config.link_for(&self.reference);
    }

    fn report_failure(&self, error: &CollaboratorError) {
        self.notifications.warn(error.to_string());
    }
}
