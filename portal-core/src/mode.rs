//! Streaming modes
//!
//! Each mode carries its display label and the path segment used in the
//! launch URL, so a label can never be paired with the wrong path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LinkError;

/// How a portal session is rendered and delivered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StreamingMode {
    /// Cloud-rendered, streamed into a browser tab
    #[default]
    #[serde(rename = "cloud/browser")]
    Browser,
    /// Cloud-rendered, streamed to a standalone XR headset
    #[serde(rename = "cloud/standalone")]
    Xr,
    /// Rendered locally on a Windows machine
    #[serde(rename = "local/windows")]
    Local,
}

impl StreamingMode {
    /// All modes in dropdown order
    pub const ALL: [StreamingMode; 3] = [
        StreamingMode::Browser,
        StreamingMode::Xr,
        StreamingMode::Local,
    ];

    /// Label shown in the mode dropdown
    pub fn label(&self) -> &'static str {
        match self {
            StreamingMode::Browser => "browser",
            StreamingMode::Xr => "XR",
            StreamingMode::Local => "local",
        }
    }

    /// Path segment used in the launch URL
    pub fn technical(&self) -> &'static str {
        match self {
            StreamingMode::Browser => "cloud/browser",
            StreamingMode::Xr => "cloud/standalone",
            StreamingMode::Local => "local/windows",
        }
    }

    /// Position of this mode in [`StreamingMode::ALL`]
    pub fn index(&self) -> usize {
        match self {
            StreamingMode::Browser => 0,
            StreamingMode::Xr => 1,
            StreamingMode::Local => 2,
        }
    }

    /// Parse the technical form, as stored in settings
    pub fn from_technical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.technical() == value)
    }

    /// Parse a display label. Older panels labelled XR as "VR".
    pub fn from_label(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "browser" => Some(StreamingMode::Browser),
            "xr" | "vr" => Some(StreamingMode::Xr),
            "local" => Some(StreamingMode::Local),
            _ => None,
        }
    }
}

impl fmt::Display for StreamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StreamingMode {
    type Err = LinkError;

    /// Accepts either a display label or the technical form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_technical(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| LinkError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_paths_are_paired() {
        assert_eq!(StreamingMode::Browser.label(), "browser");
        assert_eq!(StreamingMode::Browser.technical(), "cloud/browser");
        assert_eq!(StreamingMode::Xr.label(), "XR");
        assert_eq!(StreamingMode::Xr.technical(), "cloud/standalone");
        assert_eq!(StreamingMode::Local.label(), "local");
        assert_eq!(StreamingMode::Local.technical(), "local/windows");
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, mode) in StreamingMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_from_technical() {
        assert_eq!(
            StreamingMode::from_technical("cloud/standalone"),
            Some(StreamingMode::Xr)
        );
        assert_eq!(StreamingMode::from_technical("cloud/vr"), None);
        assert_eq!(StreamingMode::from_technical(""), None);
    }

    #[test]
    fn test_from_label_accepts_legacy_vr() {
        assert_eq!(StreamingMode::from_label("VR"), Some(StreamingMode::Xr));
        assert_eq!(StreamingMode::from_label("xr"), Some(StreamingMode::Xr));
        assert_eq!(StreamingMode::from_label("Browser"), Some(StreamingMode::Browser));
        assert_eq!(StreamingMode::from_label("desktop"), None);
    }

    #[test]
    fn test_from_str_accepts_both_forms() {
        assert_eq!("local".parse::<StreamingMode>(), Ok(StreamingMode::Local));
        assert_eq!(
            "local/windows".parse::<StreamingMode>(),
            Ok(StreamingMode::Local)
        );
        assert_eq!(
            "holo".parse::<StreamingMode>(),
            Err(LinkError::UnknownMode("holo".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_technical_form() {
        let json = serde_json::to_string(&StreamingMode::Xr).unwrap();
        assert_eq!(json, "\"cloud/standalone\"");

        let mode: StreamingMode = serde_json::from_str("\"local/windows\"").unwrap();
        assert_eq!(mode, StreamingMode::Local);
    }
}
