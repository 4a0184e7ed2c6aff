//! `slr watch` – stdin navigation events in, redirect lines out.

use anyhow::{Context, Result};
use slr_core::navigation::{LineSource, NavigationHub, TabId};
use slr_core::redirector::{Redirector, TabRedirector};
use slr_core::store::SettingsStore;
use slr_core::LaunchUri;
use std::io::{BufRead, Write};
use std::sync::{Mutex, PoisonError};

/// Tab redirector that prints `<tab-id>\t<uri>` lines for a host to act on.
pub struct LineRedirector<W> {
    out: Mutex<W>,
}

impl<W: Write> LineRedirector<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write> TabRedirector for LineRedirector<W> {
    fn redirect(&self, tab_id: TabId, uri: &LaunchUri) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{tab_id}\t{uri}").context("write redirect")?;
        out.flush().context("flush redirect")?;
        Ok(())
    }
}

/// Runs until `input` is exhausted. Returns the number of events handled.
pub fn run_watch<S, R, W>(store: S, input: R, out: W) -> Result<usize>
where
    S: SettingsStore,
    R: BufRead,
    W: Write,
{
    let redirector = Redirector::new(store, LineRedirector::new(out));
    let mut hub = NavigationHub::new();
    hub.on_before_navigate(|event| match redirector.handle(event) {
        Ok(outcome) => tracing::debug!(tab = event.tab_id, ?outcome, "navigation handled"),
        Err(e) => tracing::warn!(tab = event.tab_id, "redirect failed: {:#}", e),
    });
    LineSource::new(input).pump(&mut hub)
}
