//! # Portal UI - Panel State Library
//!
//! Everything the Innoactive Portal panel needs besides the widgets
//! themselves. Hosts render the form and forward widget events here.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Panel** - Form state, link derivation and Copy/Test/Invite actions
//! - **Notifications** - Auto-dismissing info and warning lines
//! - **Traits** - Seams for the host's stage, clipboard, browser and settings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portal_core::ApplicationCatalog;
//! use portal_ui::{MemoryStore, PortalPanel};
//!
//! let mut panel = PortalPanel::new(MemoryStore::new(), ApplicationCatalog::builtin());
//!
//! // On startup, pick up the open scene without nagging the user
//! panel.use_stage_file(&host_stage, true);
//!
//! // Widget callbacks
//! panel.select_mode(1)?;
//! panel.set_base_url("https://acme.innoactive.io");
//!
//! // "Copy" button
//! panel.copy_link(&host_clipboard);
//! label.set_text(panel.sharing_link());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`panel`] | Form state and actions |
//! | [`notification`] | Notification slots with cancellable dismiss timers |
//! | [`traits`] | Host collaborator traits |

pub mod notification;
pub mod panel;
pub mod traits;

pub use notification::{Notification, NotificationBoard, Severity, DEFAULT_DISPLAY_DURATION};
pub use panel::PortalPanel;
pub use traits::{Browser, Clipboard, CollaboratorError, MemoryStore, SettingsStore, StageAccessor};
