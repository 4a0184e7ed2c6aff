//! Redirector service: wires a settings store, the gate and a tab redirector
//! together for each navigation event.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::gate::{self, pause, Decision, PauseState, Skip};
use crate::navigation::{NavigationEvent, TabId};
use crate::store::SettingsStore;
use crate::translate::LaunchUri;

/// Sends a tab to a launch URI.
pub trait TabRedirector {
    fn redirect(&self, tab_id: TabId, uri: &LaunchUri) -> Result<()>;
}

pub type Clock = fn() -> DateTime<Utc>;

type RedirectHook = Box<dyn Fn(&NavigationEvent, &LaunchUri) + Send + Sync>;

/// What happened to one navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Subframe navigation; never redirected.
    IgnoredFrame,
    Skipped(Skip),
    Redirected(LaunchUri),
}

pub struct Redirector<S, T> {
    store: S,
    tabs: T,
    clock: Clock,
    on_redirect: Option<RedirectHook>,
}

impl<S: SettingsStore, T: TabRedirector> Redirector<S, T> {
    pub fn new(store: S, tabs: T) -> Self {
        Self {
            store,
            tabs,
            clock: Utc::now,
            on_redirect: None,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Hook run after each successful tab redirect (e.g. to count them).
    pub fn on_redirect(
        mut self,
        hook: impl Fn(&NavigationEvent, &LaunchUri) + Send + Sync + 'static,
    ) -> Self {
        self.on_redirect = Some(Box::new(hook));
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tabs(&self) -> &T {
        &self.tabs
    }

    pub fn handle(&self, event: &NavigationEvent) -> Result<Outcome> {
        if !event.top_level {
            return Ok(Outcome::IgnoredFrame);
        }

        let now = (self.clock)();
        let mut settings = self.store.get().context("read settings")?;
        if let Some(patch) = pause::settle(&settings, now) {
            settings = self.store.set(&patch).context("clear expired pause")?;
            tracing::info!("pause expired, redirects resumed");
        }

        let pause = PauseState::from_settings(&settings, now);
        match gate::attempt(&event.url, &settings.policy(), &pause, now) {
            Decision::Redirect(uri) => {
                self.tabs
                    .redirect(event.tab_id, &uri)
                    .with_context(|| format!("redirect tab {} to {}", event.tab_id, uri))?;
                if let Some(hook) = &self.on_redirect {
                    hook(event, &uri);
                }
                tracing::info!(tab = event.tab_id, %uri, "redirected");
                Ok(Outcome::Redirected(uri))
            }
            Decision::Skip(skip) => Ok(Outcome::Skipped(skip)),
        }
    }
}
