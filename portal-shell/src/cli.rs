//! Command-line interface for Portal Studio
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! portal-studio --help
//!
//! # Sharing link for a Nucleus file, streamed to a headset
//! portal-studio link --file omniverse://nucleus/Projects/plant.usd --mode xr
//!
//! # Configure the portal domain once
//! portal-studio config set --base-url https://acme.innoactive.io
//!
//! # Register an uploaded runtime
//! portal-studio apps add "Factory Viewer" 5f3c2a10-0d2b-4c4e-9a51-0a1d2c3b4e5f
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Portal Studio - Innoactive Portal sharing links for USD scenes
///
/// Builds deep links that launch a cloud streaming session of a USD file
/// hosted on Nucleus or a web server.
#[derive(Parser, Debug, Clone)]
#[command(name = "portal-studio")]
#[command(author = "Innoactive")]
#[command(version)]
#[command(about = "Generate Innoactive Portal sharing links for USD scenes", long_about = None)]
pub struct Args {
    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL", global = true)]
    pub log_level: String,

    /// Preferences file
    ///
    /// Defaults to ~/.innoactive/portal/preferences.json
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Use the runtime catalog of older portal deployments (numeric ids)
    #[arg(long, global = true)]
    pub legacy_catalog: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the sharing link for a USD file
    Link {
        /// omniverse://, http:// or https:// URL of the USD file
        #[arg(short, long, value_name = "URL")]
        file: String,

        /// Streaming mode: browser, xr, local (or cloud/browser, ...)
        #[arg(short, long)]
        mode: Option<String>,

        /// Runtime id, or its position in `apps list`
        #[arg(short, long)]
        app: Option<String>,

        /// Portal domain, e.g. https://acme.innoactive.io
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Pass the bare file URL instead of `--usd <file>`
        #[arg(long)]
        bare_path: bool,

        /// Remember mode, runtime and base URL for next time
        #[arg(long)]
        save: bool,
    },

    /// Print the portal page for inviting users to a shared file
    Invite {
        /// USD file the invited user will open
        #[arg(short, long, value_name = "URL")]
        file: String,

        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Show or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage runtimes
    Apps {
        #[command(subcommand)]
        action: AppsAction,
    },

    /// List streaming modes
    Modes,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Set {
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        #[arg(short, long)]
        mode: Option<String>,
        #[arg(short, long)]
        app: Option<String>,
        /// Pass the bare file URL instead of `--usd <file>`
        #[arg(long)]
        bare_path: Option<bool>,
    },
    /// Restore defaults (custom runtimes are kept)
    Reset,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AppsAction {
    List,
    /// Register an uploaded runtime
    Add { name: String, id: String },
    /// Remove a registered runtime
    Remove { id: String },
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }
}
