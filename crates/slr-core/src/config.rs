use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::gate::{PauseState, RedirectPolicy};

/// User settings loaded from `~/.config/slr/settings.toml`.
///
/// Missing keys fall back to their defaults, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Manual on/off switch.
    pub enabled: bool,
    /// End of the current pause. `9999-12-31T23:59:59Z` means until resumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_until: Option<DateTime<Utc>>,
    pub redirect_store: bool,
    pub redirect_community: bool,
    pub redirect_help: bool,
    pub redirect_help_wizard: bool,
    pub redirect_help_tickets: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let policy = RedirectPolicy::default();
        Self {
            enabled: true,
            pause_until: None,
            redirect_store: policy.redirect_store,
            redirect_community: policy.redirect_community,
            redirect_help: policy.redirect_help,
            redirect_help_wizard: policy.redirect_help_wizard,
            redirect_help_tickets: policy.redirect_help_tickets,
        }
    }
}

impl Settings {
    /// Category toggles as seen by the gate.
    pub fn policy(&self) -> RedirectPolicy {
        RedirectPolicy {
            redirect_store: self.redirect_store,
            redirect_community: self.redirect_community,
            redirect_help: self.redirect_help,
            redirect_help_wizard: self.redirect_help_wizard,
            redirect_help_tickets: self.redirect_help_tickets,
        }
    }

    pub fn pause_state(&self, now: DateTime<Utc>) -> PauseState {
        PauseState::from_settings(self, now)
    }

    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Store => self.redirect_store,
            Toggle::Community => self.redirect_community,
            Toggle::Help => self.redirect_help,
            Toggle::HelpWizard => self.redirect_help_wizard,
            Toggle::HelpTickets => self.redirect_help_tickets,
        }
    }

    /// Applies `patch` and returns the keys whose value actually changed.
    pub fn apply(&mut self, patch: &SettingsPatch) -> Vec<SettingKey> {
        let mut changed = Vec::new();

        fn put<T: PartialEq + Copy>(
            slot: &mut T,
            value: Option<T>,
            key: SettingKey,
            changed: &mut Vec<SettingKey>,
        ) {
            if let Some(v) = value {
                if *slot != v {
                    *slot = v;
                    changed.push(key);
                }
            }
        }

        put(&mut self.enabled, patch.enabled, SettingKey::Enabled, &mut changed);
        put(
            &mut self.pause_until,
            patch.pause_until,
            SettingKey::PauseUntil,
            &mut changed,
        );
        for toggle in Toggle::ALL {
            put(
                self.toggle_mut(toggle),
                patch.toggle(toggle),
                SettingKey::Toggle(toggle),
                &mut changed,
            );
        }
        changed
    }

    fn toggle_mut(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::Store => &mut self.redirect_store,
            Toggle::Community => &mut self.redirect_community,
            Toggle::Help => &mut self.redirect_help,
            Toggle::HelpWizard => &mut self.redirect_help_wizard,
            Toggle::HelpTickets => &mut self.redirect_help_tickets,
        }
    }
}

/// One of the per-category redirect switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Store,
    Community,
    Help,
    HelpWizard,
    HelpTickets,
}

impl Toggle {
    pub const ALL: [Toggle; 5] = [
        Toggle::Store,
        Toggle::Community,
        Toggle::Help,
        Toggle::HelpWizard,
        Toggle::HelpTickets,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Toggle::Store => "store",
            Toggle::Community => "community",
            Toggle::Help => "help",
            Toggle::HelpWizard => "help-wizard",
            Toggle::HelpTickets => "help-tickets",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown toggle {0:?} (expected store, community, help, help-wizard or help-tickets)")]
pub struct ParseToggleError(String);

impl FromStr for Toggle {
    type Err = ParseToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Toggle::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseToggleError(s.to_string()))
    }
}

/// Name of a stored setting, reported to change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Enabled,
    PauseUntil,
    Toggle(Toggle),
}

/// Partial update: `None` leaves a setting untouched. For `pause_until`,
/// `Some(None)` clears the pause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub enabled: Option<bool>,
    pub pause_until: Option<Option<DateTime<Utc>>>,
    pub redirect_store: Option<bool>,
    pub redirect_community: Option<bool>,
    pub redirect_help: Option<bool>,
    pub redirect_help_wizard: Option<bool>,
    pub redirect_help_tickets: Option<bool>,
}

impl SettingsPatch {
    /// Patch setting a single category toggle.
    pub fn toggle_only(toggle: Toggle, on: bool) -> Self {
        let mut patch = Self::default();
        *patch.toggle_slot(toggle) = Some(on);
        patch
    }

    pub fn toggle(&self, toggle: Toggle) -> Option<bool> {
        match toggle {
            Toggle::Store => self.redirect_store,
            Toggle::Community => self.redirect_community,
            Toggle::Help => self.redirect_help,
            Toggle::HelpWizard => self.redirect_help_wizard,
            Toggle::HelpTickets => self.redirect_help_tickets,
        }
    }

    fn toggle_slot(&mut self, toggle: Toggle) -> &mut Option<bool> {
        match toggle {
            Toggle::Store => &mut self.redirect_store,
            Toggle::Community => &mut self.redirect_community,
            Toggle::Help => &mut self.redirect_help,
            Toggle::HelpWizard => &mut self.redirect_help_wizard,
            Toggle::HelpTickets => &mut self.redirect_help_tickets,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("slr")?;
    Ok(xdg_dirs.place_config_file("settings.toml")?)
}

/// Load settings from `path`. A missing file yields `Ok(None)`.
pub fn load_from_path(path: &Path) -> Result<Option<Settings>> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read settings: {}", path.display())),
    };
    let settings: Settings =
        toml::from_str(&data).with_context(|| format!("parse settings: {}", path.display()))?;
    Ok(Some(settings))
}

/// Write settings to `path`, creating the parent directory if needed.
///
/// The file is written next to `path` and renamed over it, so a concurrent
/// reader sees either the old or the new contents.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create dir: {}", parent.display()))?;
    let toml = toml::to_string_pretty(settings).context("serialize settings")?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp file in {}", parent.display()))?;
    tmp.write_all(toml.as_bytes())
        .with_context(|| format!("write settings: {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync settings: {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replace settings: {}", path.display()))?;
    Ok(())
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if let Some(settings) = load_from_path(&path)? {
        return Ok(settings);
    }
    let default_settings = Settings::default();
    save_to_path(&default_settings, &path)?;
    tracing::info!("created default settings at {}", path.display());
    Ok(default_settings)
}
