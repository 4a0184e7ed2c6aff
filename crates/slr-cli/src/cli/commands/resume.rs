//! `slr resume` / `slr disable` – the manual switch.

use anyhow::Result;
use slr_core::gate::pause;
use slr_core::store::SettingsStore;
use std::io::Write;

pub fn run_resume(store: &impl SettingsStore, out: &mut impl Write) -> Result<()> {
    store.set(&pause::resume())?;
    tracing::info!("redirects resumed");
    writeln!(out, "Redirects active")?;
    Ok(())
}

pub fn run_disable(store: &impl SettingsStore, out: &mut impl Write) -> Result<()> {
    store.set(&pause::disable())?;
    tracing::info!("redirects disabled");
    writeln!(out, "Redirects disabled")?;
    Ok(())
}
