//! Enabled / paused / disabled state.
//!
//! The state is derived from a settings snapshot at decision time; nothing
//! runs in the background. An expired pause reads as [`PauseState::Active`]
//! straight away, and [`settle`] produces the patch that clears it from the
//! store.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use super::Refusal;
use crate::config::{Settings, SettingsPatch};

/// Stored deadlines at or past this year mean "until resumed".
const INDEFINITE_YEAR: i32 = 9999;

/// Timestamp written for an indefinite pause (`9999-12-31T23:59:59Z`).
pub fn indefinite_sentinel() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(INDEFINITE_YEAR, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseUntil {
    At(DateTime<Utc>),
    Indefinite,
}

impl PauseUntil {
    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        if ts.year() >= INDEFINITE_YEAR {
            PauseUntil::Indefinite
        } else {
            PauseUntil::At(ts)
        }
    }

    pub fn to_timestamp(self) -> DateTime<Utc> {
        match self {
            PauseUntil::At(ts) => ts,
            PauseUntil::Indefinite => indefinite_sentinel(),
        }
    }
}

/// `Active ⇄ Paused(until) ⇄ Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    Active,
    Paused(PauseUntil),
    /// Manual off switch; independent of any pause deadline.
    Disabled,
}

impl PauseState {
    pub fn from_settings(settings: &Settings, now: DateTime<Utc>) -> Self {
        if !settings.enabled {
            return PauseState::Disabled;
        }
        match settings.pause_until.map(PauseUntil::from_timestamp) {
            Some(PauseUntil::Indefinite) => PauseState::Paused(PauseUntil::Indefinite),
            Some(PauseUntil::At(until)) if now < until => PauseState::Paused(PauseUntil::At(until)),
            _ => PauseState::Active,
        }
    }

    /// Why redirects are refused at `now`, if they are.
    pub fn refusal_at(&self, now: DateTime<Utc>) -> Option<Refusal> {
        match self {
            PauseState::Active => None,
            PauseState::Disabled => Some(Refusal::Disabled),
            PauseState::Paused(PauseUntil::Indefinite) => Some(Refusal::Paused),
            PauseState::Paused(PauseUntil::At(until)) => (now < *until).then_some(Refusal::Paused),
        }
    }

    pub fn blocks_at(&self, now: DateTime<Utc>) -> bool {
        self.refusal_at(now).is_some()
    }

    /// Time left on a timed pause. `None` when not paused, indefinitely
    /// paused, or already expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        match self {
            PauseState::Paused(PauseUntil::At(until)) if now < *until => Some(*until - now),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PauseState::Active => "Active",
            PauseState::Paused(_) => "Paused",
            PauseState::Disabled => "Disabled",
        }
    }

    /// Countdown text: `m:ss` for timed pauses, `∞` for indefinite ones.
    pub fn countdown(&self, now: DateTime<Utc>) -> Option<String> {
        match self {
            PauseState::Paused(PauseUntil::Indefinite) => Some("∞".to_string()),
            _ => self.remaining(now).map(|left| {
                let secs = left.num_seconds().max(0);
                format!("{}:{:02}", secs / 60, secs % 60)
            }),
        }
    }
}

/// Longest timed pause (one week). Longer pauses should be indefinite.
pub const MAX_PAUSE_MINUTES: u32 = 7 * 24 * 60;

/// Pause for `minutes`, starting at `now`. `minutes` is clamped to
/// `1..=MAX_PAUSE_MINUTES`.
pub fn pause_for(minutes: u32, now: DateTime<Utc>) -> SettingsPatch {
    let minutes = minutes.clamp(1, MAX_PAUSE_MINUTES);
    let until = now
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or_else(indefinite_sentinel);
    SettingsPatch {
        enabled: Some(true),
        pause_until: Some(Some(until)),
        ..SettingsPatch::default()
    }
}

pub fn pause_indefinitely() -> SettingsPatch {
    SettingsPatch {
        enabled: Some(true),
        pause_until: Some(Some(indefinite_sentinel())),
        ..SettingsPatch::default()
    }
}

/// Back to `Active` from either a pause or a manual disable.
pub fn resume() -> SettingsPatch {
    SettingsPatch {
        enabled: Some(true),
        pause_until: Some(None),
        ..SettingsPatch::default()
    }
}

pub fn disable() -> SettingsPatch {
    SettingsPatch {
        enabled: Some(false),
        pause_until: Some(None),
        ..SettingsPatch::default()
    }
}

/// Patch clearing a timed pause that has run out by `now`.
pub fn settle(settings: &Settings, now: DateTime<Utc>) -> Option<SettingsPatch> {
    match settings.pause_until.map(PauseUntil::from_timestamp)? {
        PauseUntil::At(until) if now >= until => Some(SettingsPatch {
            pause_until: Some(None),
            ..SettingsPatch::default()
        }),
        _ => None,
    }
}
