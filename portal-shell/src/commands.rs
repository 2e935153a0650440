//! Command handlers
//!
//! Each command drives a [`PortalPanel`] the way the panel's widgets would,
//! so the command line and the panel share validation and notifications.

use anyhow::{bail, Context, Result};
use std::io::Write;

use portal_core::{AppId, ApplicationCatalog, ArgumentStyle, PortalConfig, StreamingMode};
use portal_settings::{JsonSettingsStore, Preferences};
use portal_ui::{NotificationBoard, PortalPanel, SettingsStore};

use crate::cli::{AppsAction, Args, Command, ConfigAction};
use crate::sinks::WriterSink;

/// Settings store selected by the global flags
pub fn open_store(args: &Args) -> JsonSettingsStore {
    let store = match &args.settings {
        Some(path) => JsonSettingsStore::new(path),
        None => JsonSettingsStore::at_default_path(),
    };
    store.with_legacy_catalog(args.legacy_catalog)
}

pub fn run<W: Write>(args: &Args, out: &WriterSink<W>) -> Result<()> {
    let store = open_store(args);
    log::debug!("Using preferences at {}", store.path().display());

    match &args.command {
        Command::Link {
            file,
            mode,
            app,
            base_url,
            bare_path,
            save,
        } => {
            let mut panel = open_panel(&store);
            apply_selection(&mut panel, base_url.as_deref(), mode.as_deref(), app.as_deref())?;
            if *bare_path {
                panel.set_argument_style(ArgumentStyle::BarePath);
            }
            if *save {
                panel
                    .save_settings()
                    .context("Failed to save settings")?;
            }
            panel.set_reference(file.as_str());

            if !panel.copy_link(out) {
                bail!(last_warning(&panel));
            }
            Ok(())
        }
        Command::Invite { file, base_url } => {
            let mut panel = open_panel(&store);
            apply_selection(&mut panel, base_url.as_deref(), None, None)?;
            panel.set_reference(file.as_str());

            if !panel.open_invite(out) {
                bail!(last_warning(&panel));
            }
            Ok(())
        }
        Command::Config { action } => run_config(&store, action, out),
        Command::Apps { action } => run_apps(&store, action, out),
        Command::Modes => {
            for mode in StreamingMode::ALL {
                out.write_line(&format!(
                    "{}  {:<8} {}",
                    mode.index(),
                    mode.label(),
                    mode.technical()
                ))?;
            }
            Ok(())
        }
    }
}

fn run_config<W: Write>(
    store: &JsonSettingsStore,
    action: &ConfigAction,
    out: &WriterSink<W>,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let panel = open_panel(store);
            let config = panel.config();
            let app_name = panel
                .catalog()
                .find(&config.app_id)
                .map(|a| a.name.as_str())
                .unwrap_or("unknown");

            out.write_line(&format!("settings:       {}", store.path().display()))?;
            out.write_line(&format!("base_url:       {}", config.base_url))?;
            out.write_line(&format!("render_mode:    {}", config.mode.technical()))?;
            out.write_line(&format!("app_id:         {} ({})", config.app_id, app_name))?;
            out.write_line(&format!(
                "argument_style: {}",
                match config.argument_style {
                    ArgumentStyle::UsdFlag => "usd_flag",
                    ArgumentStyle::BarePath => "bare_path",
                }
            ))?;
            if config.has_default_base_url() {
                log::warn!("Base URL is still the placeholder, set it with `config set --base-url`");
            }
            Ok(())
        }
        ConfigAction::Set {
            base_url,
            mode,
            app,
            bare_path,
        } => {
            let mut panel = open_panel(store);
            apply_selection(&mut panel, base_url.as_deref(), mode.as_deref(), app.as_deref())?;
            if let Some(bare_path) = bare_path {
                panel.set_argument_style(ArgumentStyle::from_flag(!bare_path));
            }
            panel
                .save_settings()
                .context("Failed to save settings")?;
            log::info!("Settings saved to {}", store.path().display());
            Ok(())
        }
        ConfigAction::Reset => {
            let config = PortalConfig::default_for(&store.catalog());
            store
                .save(&config)
                .context("Failed to reset settings")?;
            log::info!("Settings reset to defaults");
            Ok(())
        }
    }
}

fn run_apps<W: Write>(
    store: &JsonSettingsStore,
    action: &AppsAction,
    out: &WriterSink<W>,
) -> Result<()> {
    match action {
        AppsAction::List => {
            let panel = open_panel(store);
            let selected = panel.app_index();
            for (i, app) in panel.catalog().apps().iter().enumerate() {
                let marker = if Some(i) == selected { "*" } else { " " };
                let custom = if app.is_custom { " (custom)" } else { "" };
                out.write_line(&format!("{marker} {i}  {}  {}{custom}", app.id, app.name))?;
            }
            Ok(())
        }
        AppsAction::Add { name, id } => {
            let id = AppId::from(id.as_str());
            if id.is_empty() {
                bail!("Runtime id must not be empty");
            }
            if ApplicationCatalog::is_reserved(&id) {
                bail!("Runtime id {} belongs to a built-in runtime", id);
            }
            let mut prefs = load_preferences(store)?;
            prefs.upsert_custom_app(name.as_str(), id.clone());
            prefs.save_to(store.path())?;
            log::info!("Registered runtime '{}' ({})", name, id);
            Ok(())
        }
        AppsAction::Remove { id } => {
            let id = AppId::from(id.as_str());
            let mut prefs = load_preferences(store)?;
            if !prefs.remove_custom_app(&id) {
                bail!("No custom runtime with id {}", id);
            }
            prefs.save_to(store.path())?;
            log::info!("Removed runtime {}", id);
            Ok(())
        }
    }
}

/// Panel over `store` without autosave. Commands that persist call
/// `save_settings` once every override is applied, so a rejected override
/// leaves the file untouched.
fn open_panel(store: &JsonSettingsStore) -> PortalPanel<&JsonSettingsStore> {
    PortalPanel::new(store, store.catalog())
        .with_autosave(false)
        .with_notifications(NotificationBoard::manual())
}

fn load_preferences(store: &JsonSettingsStore) -> Result<Preferences> {
    store
        .preferences()
        .with_context(|| format!("Failed to read {}", store.path().display()))
}

/// Apply command-line overrides in the order the panel's widgets are laid out
fn apply_selection<S: SettingsStore>(
    panel: &mut PortalPanel<S>,
    base_url: Option<&str>,
    mode: Option<&str>,
    app: Option<&str>,
) -> Result<()> {
    if let Some(app) = app {
        select_app(panel, app)?;
    }
    if let Some(mode) = mode {
        panel.set_mode(mode.parse()?);
    }
    if let Some(base_url) = base_url {
        panel.set_base_url(base_url);
    }
    Ok(())
}

/// Select a runtime by id, falling back to its list position.
/// Legacy ids are numeric, so ids take precedence.
fn select_app<S: SettingsStore>(panel: &mut PortalPanel<S>, value: &str) -> Result<()> {
    let id = AppId::from(value);
    if panel.catalog().find(&id).is_none() {
        if let Ok(index) = value.parse::<usize>() {
            panel.select_app(index)?;
            return Ok(());
        }
    }
    panel.set_app_id(&id)?;
    Ok(())
}

fn last_warning<S: SettingsStore>(panel: &PortalPanel<S>) -> String {
    panel
        .notifications()
        .warning_message()
        .map(|n| n.text)
        .unwrap_or_else(|| "Sharing link could not be produced".to_string())
}
