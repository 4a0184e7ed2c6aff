//! Tab redirector that records every redirect instead of navigating.

use std::sync::Mutex;

use slr_core::navigation::TabId;
use slr_core::redirector::TabRedirector;
use slr_core::LaunchUri;

#[derive(Default)]
pub struct RecordingTabs {
    pub redirects: Mutex<Vec<(TabId, String)>>,
    pub fail: bool,
}

impl RecordingTabs {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn take(&self) -> Vec<(TabId, String)> {
        std::mem::take(&mut *self.redirects.lock().unwrap())
    }
}

impl TabRedirector for RecordingTabs {
    fn redirect(&self, tab_id: TabId, uri: &LaunchUri) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("tab {tab_id} is gone");
        }
        self.redirects
            .lock()
            .unwrap()
            .push((tab_id, uri.to_string()));
        Ok(())
    }
}
