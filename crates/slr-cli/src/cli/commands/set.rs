//! `slr set <toggle> <on|off>` – flip a category toggle.

use anyhow::Result;
use slr_core::config::{SettingsPatch, Toggle};
use slr_core::store::SettingsStore;
use std::io::Write;

pub fn run_set(
    store: &impl SettingsStore,
    toggle: Toggle,
    on: bool,
    out: &mut impl Write,
) -> Result<()> {
    store.set(&SettingsPatch::toggle_only(toggle, on))?;
    let value = if on { "on" } else { "off" };
    tracing::info!(toggle = toggle.as_str(), value, "toggle updated");
    writeln!(out, "{toggle} redirects {value}")?;
    Ok(())
}
