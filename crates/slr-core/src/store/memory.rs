use std::sync::{PoisonError, RwLock};

use anyhow::Result;

use super::{Listener, Listeners, SettingsStore};
use crate::config::{Settings, SettingsPatch};

/// Process-local store. Nothing is persisted.
#[derive(Default)]
pub struct MemoryStore {
    settings: RwLock<Settings>,
    listeners: Listeners,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            listeners: Listeners::default(),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self) -> Result<Settings> {
        Ok(self
            .settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn set(&self, patch: &SettingsPatch) -> Result<Settings> {
        let (changed, snapshot) = {
            let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            let changed = settings.apply(patch);
            (changed, settings.clone())
        };
        self.listeners.notify(changed, &snapshot);
        Ok(snapshot)
    }

    fn on_change(&self, listener: Listener) {
        self.listeners.push(listener);
    }
}
