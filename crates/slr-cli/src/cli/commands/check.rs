//! `slr check <url>` – run the gate against the stored settings.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::json;
use slr_core::gate::{self, Decision, Skip};
use slr_core::store::SettingsStore;
use std::io::Write;

pub fn run_check(
    store: &impl SettingsStore,
    url: &str,
    as_json: bool,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> Result<()> {
    let settings = store.get()?;
    let pause = settings.pause_state(now);
    let decision = gate::attempt(url, &settings.policy(), &pause, now);

    if as_json {
        let value = match &decision {
            Decision::Redirect(uri) => json!({
                "url": url,
                "decision": "redirect",
                "uri": uri,
            }),
            Decision::Skip(skip) => json!({
                "url": url,
                "decision": "skip",
                "refused": matches!(skip, Skip::Refused(_)),
                "reason": skip.to_string(),
            }),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    match decision {
        Decision::Redirect(uri) => writeln!(out, "redirect {uri}")?,
        Decision::Skip(skip) => writeln!(out, "skip: {skip}")?,
    }
    Ok(())
}
