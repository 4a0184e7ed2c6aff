use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::Result;

use super::{Listener, Listeners, SettingsStore};
use crate::config::{self, Settings, SettingsPatch};

/// Store backed by a TOML file. Every `get` re-reads the file so edits made
/// by other processes are picked up; a missing file reads as defaults.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
    listeners: Listeners,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            listeners: Listeners::default(),
        }
    }

    /// Store at the default XDG location, creating the file if needed.
    pub fn open_default() -> Result<Self> {
        config::load_or_init()?;
        Ok(Self::new(config::config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn get(&self) -> Result<Settings> {
        Ok(config::load_from_path(&self.path)?.unwrap_or_default())
    }

    fn set(&self, patch: &SettingsPatch) -> Result<Settings> {
        let (changed, settings) = {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let mut settings = self.get()?;
            let changed = settings.apply(patch);
            if !changed.is_empty() {
                config::save_to_path(&settings, &self.path)?;
            }
            (changed, settings)
        };
        self.listeners.notify(changed, &settings);
        Ok(settings)
    }

    fn on_change(&self, listener: Listener) {
        self.listeners.push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Toggle;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.toml"));
        assert_eq!(store.get().unwrap(), Settings::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn set_persists_to_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let store = FileStore::new(&path);
        store
            .set(&SettingsPatch::toggle_only(Toggle::Store, false))
            .unwrap();

        let reopened = FileStore::new(&path);
        assert!(!reopened.get().unwrap().redirect_store);
    }

    #[test]
    fn external_edits_are_visible() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let store = FileStore::new(&path);
        std::fs::write(&path, "enabled = false\n").unwrap();
        assert!(!store.get().unwrap().enabled);
    }

    #[test]
    fn unchanged_set_skips_write_and_listeners() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let store = FileStore::new(&path);
        let fired = Arc::new(AtomicBool::new(false));
        {
            let fired = Arc::clone(&fired);
            store.on_change(Box::new(move |_| fired.store(true, Ordering::SeqCst)));
        }
        store.set(&SettingsPatch::default()).unwrap();
        assert!(!path.exists());
        assert!(!fired.load(Ordering::SeqCst));
    }
}
