//! `slr status` – show the switch state and category toggles.

use anyhow::Result;
use chrono::{DateTime, Utc};
use slr_core::config::Toggle;
use slr_core::gate::{PauseState, PauseUntil};
use slr_core::store::SettingsStore;
use std::io::Write;
use std::path::Path;

pub fn run_status(
    store: &impl SettingsStore,
    settings_path: Option<&Path>,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> Result<()> {
    let settings = store.get()?;
    let state = settings.pause_state(now);
    let state_line = match (state, state.countdown(now)) {
        (PauseState::Paused(PauseUntil::Indefinite), _) => "Paused (until resumed)".to_string(),
        (PauseState::Paused(_), Some(left)) => format!("Paused (resumes in {left})"),
        (state, _) => state.label().to_string(),
    };

    writeln!(out, "{:<14}{}", "state", state_line)?;
    for toggle in Toggle::ALL {
        let value = if settings.toggle(toggle) { "on" } else { "off" };
        writeln!(out, "{:<14}{}", toggle.as_str(), value)?;
    }
    if let Some(path) = settings_path {
        writeln!(out, "{:<14}{}", "settings", path.display())?;
    }
    Ok(())
}
