//! Runtime application catalog
//!
//! Application ids started out as small integers and later became UUID-like
//! strings, so [`AppId`] is an opaque string that accepts both.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LinkError, LinkResult};

/// Identifier of a runtime application in the portal
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Legacy numeric ids
impl From<u32> for AppId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A runtime application the link can launch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationTarget {
    /// Name shown in the runtime dropdown
    pub name: String,
    pub id: AppId,
    /// Registered by the user rather than shipped with the panel
    #[serde(default)]
    pub is_custom: bool,
}

impl ApplicationTarget {
    pub fn new(name: impl Into<String>, id: impl Into<AppId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            is_custom: false,
        }
    }

    pub fn new_custom(name: impl Into<String>, id: impl Into<AppId>) -> Self {
        Self {
            is_custom: true,
            ..Self::new(name, id)
        }
    }
}

/// Ordered list of runtime applications, in dropdown order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationCatalog {
    apps: Vec<ApplicationTarget>,
}

impl ApplicationCatalog {
    /// Runtimes offered by current portal deployments
    pub fn builtin() -> Self {
        Self::from_targets(vec![
            ApplicationTarget::new(
                "Omniverse USD Explorer",
                "7b0b754a-b90b-4d3b-a043-d9a72f1e4d7f",
            ),
            ApplicationTarget::new(
                "Omniverse USD Composer",
                "48d5be05-49af-41d3-a383-942ebc377c59",
            ),
            ApplicationTarget::new(
                "Omniverse USD Streamer for AVP (XR only)",
                "0a7b7798-123e-4158-ad66-a09e255a2400",
            ),
        ])
    }

    /// Runtimes of older deployments that still use numeric ids
    pub fn legacy() -> Self {
        Self::from_targets(vec![
            ApplicationTarget::new("Omniverse USD Composer 2023.2.3", 3757u32),
            ApplicationTarget::new("Omniverse USD Composer 2023.2.0", 1501u32),
        ])
    }

    /// True if `id` belongs to a built-in or legacy runtime
    pub fn is_reserved(id: &AppId) -> bool {
        Self::builtin().find(id).is_some() || Self::legacy().find(id).is_some()
    }

    pub fn from_targets(apps: Vec<ApplicationTarget>) -> Self {
        Self { apps }
    }

    pub fn apps(&self) -> &[ApplicationTarget] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Entry at a dropdown index
    pub fn get(&self, index: usize) -> LinkResult<&ApplicationTarget> {
        self.apps.get(index).ok_or(LinkError::IndexOutOfRange {
            index,
            len: self.apps.len(),
        })
    }

    /// Find an app by id
    pub fn find(&self, id: &AppId) -> Option<&ApplicationTarget> {
        self.apps.iter().find(|app| &app.id == id)
    }

    /// Dropdown index of an app id
    pub fn position(&self, id: &AppId) -> Option<usize> {
        self.apps.iter().position(|app| &app.id == id)
    }

    /// First entry, preselected when nothing is configured
    pub fn default_app(&self) -> Option<&ApplicationTarget> {
        self.apps.first()
    }

    /// Add an app, or replace the entry with the same id
    pub fn upsert(&mut self, app: ApplicationTarget) {
        if let Some(existing) = self.apps.iter_mut().find(|a| a.id == app.id) {
            *existing = app;
        } else {
            self.apps.push(app);
        }
    }

    /// Remove a custom app. Built-in entries are never removed.
    pub fn remove_custom(&mut self, id: &AppId) -> bool {
        if let Some(pos) = self
            .apps
            .iter()
            .position(|a| &a.id == id && a.is_custom)
        {
            self.apps.remove(pos);
            true
        } else {
            false
        }
    }
}

impl Default for ApplicationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
