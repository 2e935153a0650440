//! Sharing-link and invite-link composition
//!
//! A sharing link has the shape
//!
//! ```text
//! {base_url}/apps/{app_id}/launch/{mode}?args={encoded}
//! ```
//!
//! `encoded` is the file reference, optionally prefixed with the `--usd `
//! command-line flag, percent-encoded with only RFC 3986 unreserved
//! characters (`A-Z a-z 0-9 - . _ ~`) left as-is. Slashes and colons are
//! always encoded.

use serde::{Deserialize, Serialize};

use crate::catalog::{AppId, ApplicationTarget};
use crate::error::{LinkError, LinkResult};
use crate::mode::StreamingMode;

/// Flag the runtime expects in front of the file reference
pub const USD_ARGUMENT_FLAG: &str = "--usd ";

/// Path of the portal's user management page
pub const INVITE_PATH: &str = "/control-panel/v2/users";

/// How the file reference is passed in the `args` query parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentStyle {
    /// `--usd <reference>`, understood by current runtimes
    #[default]
    UsdFlag,
    /// The bare reference, as older runtimes expect
    BarePath,
}

impl ArgumentStyle {
    pub fn from_flag(encode_as_argument: bool) -> Self {
        if encode_as_argument {
            ArgumentStyle::UsdFlag
        } else {
            ArgumentStyle::BarePath
        }
    }

    pub fn encode_as_argument(&self) -> bool {
        matches!(self, ArgumentStyle::UsdFlag)
    }
}

/// Percent-encode the `args` query value
pub fn encode_argument(file_reference: &str, encode_as_argument: bool) -> String {
    if encode_as_argument {
        let argument = format!("{USD_ARGUMENT_FLAG}{file_reference}");
        urlencoding::encode(&argument).into_owned()
    } else {
        urlencoding::encode(file_reference).into_owned()
    }
}

/// Compose a sharing link. Identical inputs always give identical output.
pub fn build_link(
    base_url: &str,
    app_id: &str,
    mode_technical: &str,
    file_reference: &str,
    encode_as_argument: bool,
) -> String {
    format!(
        "{base_url}/apps/{app_id}/launch/{mode_technical}?args={}",
        encode_argument(file_reference, encode_as_argument)
    )
}

/// URL of the page where portal users are invited
pub fn build_invite_link(base_url: &str) -> String {
    format!("{base_url}{INVITE_PATH}")
}

/// Technical path of the mode at a dropdown index
pub fn resolve_technical_mode(
    display_index: usize,
    modes: &[StreamingMode],
) -> LinkResult<&'static str> {
    modes
        .get(display_index)
        .map(StreamingMode::technical)
        .ok_or(LinkError::IndexOutOfRange {
            index: display_index,
            len: modes.len(),
        })
}

/// Application id at a dropdown index
pub fn resolve_app_id(display_index: usize, apps: &[ApplicationTarget]) -> LinkResult<&AppId> {
    apps.get(display_index)
        .map(|app| &app.id)
        .ok_or(LinkError::IndexOutOfRange {
            index: display_index,
            len: apps.len(),
        })
}

/// All inputs of a sharing link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkRequest<'a> {
    pub base_url: &'a str,
    pub app_id: &'a AppId,
    pub mode: StreamingMode,
    pub file_reference: &'a str,
    pub style: ArgumentStyle,
}

impl LinkRequest<'_> {
    pub fn to_link(&self) -> String {
        build_link(
            self.base_url,
            self.app_id.as_str(),
            self.mode.technical(),
            self.file_reference,
            self.style.encode_as_argument(),
        )
    }
}
