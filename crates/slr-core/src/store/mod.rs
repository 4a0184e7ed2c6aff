//! Settings store: snapshot reads, partial writes, change notification.
//!
//! The gate never talks to a store directly; callers read a [`Settings`]
//! snapshot per decision and pass it in. Two stores ship here: an in-memory
//! one for embedding and tests, and a TOML file under the XDG config dir.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Result;

use crate::config::{SettingKey, Settings, SettingsPatch};

/// Delivered to listeners after a `set` that changed at least one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsChange {
    pub changed: Vec<SettingKey>,
    pub settings: Settings,
}

pub type Listener = Box<dyn Fn(&SettingsChange) + Send + Sync>;

pub trait SettingsStore {
    /// Current snapshot.
    fn get(&self) -> Result<Settings>;

    /// Applies a partial update and returns the resulting snapshot.
    fn set(&self, patch: &SettingsPatch) -> Result<Settings>;

    /// Registers a listener called after every effective change.
    fn on_change(&self, listener: Listener);
}

/// Listener registry shared by the store implementations.
#[derive(Default)]
pub(crate) struct Listeners {
    inner: RwLock<Vec<Arc<dyn Fn(&SettingsChange) + Send + Sync>>>,
}

impl Listeners {
    pub(crate) fn push(&self, listener: Listener) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::from(listener));
    }

    pub(crate) fn notify(&self, changed: Vec<SettingKey>, settings: &Settings) {
        if changed.is_empty() {
            return;
        }
        let change = SettingsChange {
            changed,
            settings: settings.clone(),
        };
        tracing::debug!(changed = ?change.changed, "settings changed");
        // Listeners may register more listeners, so run them unlocked.
        let listeners = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(&change);
        }
    }
}
