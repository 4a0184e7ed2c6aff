//! `slr pause [minutes]` – pause redirects for a while, or until resumed.

use anyhow::Result;
use chrono::{DateTime, Utc};
use slr_core::gate::pause;
use slr_core::store::SettingsStore;
use std::io::Write;

pub fn run_pause(
    store: &impl SettingsStore,
    minutes: Option<u32>,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> Result<()> {
    match minutes {
        Some(minutes) => {
            let settings = store.set(&pause::pause_for(minutes, now))?;
            let until = settings.pause_until.unwrap_or(now);
            tracing::info!(minutes, until = %until, "paused");
            writeln!(
                out,
                "Paused for {minutes} minutes (until {})",
                until.format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        None => {
            store.set(&pause::pause_indefinitely())?;
            tracing::info!("paused until resumed");
            writeln!(out, "Paused until resumed")?;
        }
    }
    Ok(())
}
