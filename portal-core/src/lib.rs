//! # Portal Core
//!
//! Pure link-building logic for Innoactive Portal streaming sessions.
//! A sharing link tells the portal which USD file to open, which runtime
//! application to launch, and how the session is streamed.
//!
//! ## Overview
//!
//! | Type / Function | Purpose |
//! |-----------------|---------|
//! | [`validate_reference`] | Accept only network-reachable file references |
//! | [`StreamingMode`] | Display label paired with its launch path segment |
//! | [`ApplicationCatalog`] | Runtime applications paired with their ids |
//! | [`build_link`] | Compose `{base}/apps/{id}/launch/{mode}?args=...` |
//! | [`validate_form`] | Gate copy/open/invite actions |
//! | [`build_invite_link`] | Compose the portal's user-invite URL |
//! | [`PortalConfig`] | Persisted base URL, mode and application |
//!
//! ## Usage
//!
//! ```rust
//! use portal_core::{build_link, validate_form, StreamingMode, DEFAULT_BASE_URL};
//!
//! let reference = "omniverse://host/a b.usd";
//! assert!(validate_form(reference, "https://acme.innoactive.io", DEFAULT_BASE_URL).is_ok());
//!
//! let link = build_link(
//!     "https://acme.innoactive.io",
//!     "123",
//!     StreamingMode::Browser.technical(),
//!     reference,
//!     false,
//! );
//! assert_eq!(
//!     link,
//!     "https://acme.innoactive.io/apps/123/launch/cloud/browser?args=omniverse%3A%2F%2Fhost%2Fa%20b.usd"
//! );
//! ```
//!
//! Every function here is a pure function of its arguments. Callers that own
//! mutable form state re-derive the link after each change.

pub mod catalog;
pub mod config;
pub mod error;
pub mod link;
pub mod mode;
pub mod reference;
pub mod validation;

// Re-exports
pub use catalog::{AppId, ApplicationCatalog, ApplicationTarget};
pub use config::{PortalConfig, DEFAULT_APP_ID, DEFAULT_BASE_URL, DEFAULT_MODE};
pub use error::{LinkError, LinkResult};
pub use link::{
    build_invite_link, build_link, encode_argument, resolve_app_id, resolve_technical_mode,
    ArgumentStyle, LinkRequest, INVITE_PATH, USD_ARGUMENT_FLAG,
};
pub use mode::StreamingMode;
pub use reference::{validate_reference, SHAREABLE_SCHEMES};
pub use validation::{validate_form, ValidationError, ValidationResult};
