//! Redirect gate: decides whether a navigation should be handed to the
//! client.
//!
//! The gate reads a settings snapshot and a pause state passed in per call,
//! asks the translator only when policy allows it, and returns a plain
//! [`Decision`]. It performs no I/O; tab navigation and any counting are left
//! to the caller.

pub mod pause;
mod policy;

pub use pause::{PauseState, PauseUntil};
pub use policy::RedirectPolicy;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::translate::{self, LaunchUri, TranslateError};
use crate::url_model::{SiteFamily, SiteUrl};

/// Policy reasons for not redirecting; the translator is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    Disabled,
    Paused,
    CategoryOff(SiteFamily),
    UnknownSite,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::Disabled => f.write_str("redirects are disabled"),
            Refusal::Paused => f.write_str("redirects are paused"),
            Refusal::CategoryOff(family) => write!(f, "{family} redirects are turned off"),
            Refusal::UnknownSite => f.write_str("not a store, community or help site"),
        }
    }
}

/// Why a navigation was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// Policy declined before translation.
    Refused(Refusal),
    /// Policy allowed it but the translator had no launch URI.
    NoMatch(TranslateError),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Refused(refusal) => fmt::Display::fmt(refusal, f),
            Skip::NoMatch(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Redirect(LaunchUri),
    Skip(Skip),
}

impl Decision {
    pub fn uri(&self) -> Option<&LaunchUri> {
        match self {
            Decision::Redirect(uri) => Some(uri),
            Decision::Skip(_) => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Decision::Redirect(_))
    }
}

/// Category check only: is this URL's site allowed by `policy`?
/// Malformed URLs and unknown sites are never allowed.
pub fn should_redirect(url: &str, policy: &RedirectPolicy) -> bool {
    SiteUrl::parse(url).is_some_and(|site| category_check(&site, policy).is_ok())
}

fn category_check(site: &SiteUrl, policy: &RedirectPolicy) -> Result<(), Refusal> {
    let family = site.family().ok_or(Refusal::UnknownSite)?;
    let allowed = match family {
        SiteFamily::Store => policy.redirect_store,
        SiteFamily::Community => policy.redirect_community,
        SiteFamily::Help => policy.allows_help_path(site.path()),
    };
    if allowed {
        Ok(())
    } else {
        Err(Refusal::CategoryOff(family))
    }
}

/// Full decision as a `Result`: pause state, then category toggle, then
/// translation.
pub fn check(
    url: &str,
    policy: &RedirectPolicy,
    pause: &PauseState,
    now: DateTime<Utc>,
) -> Result<LaunchUri, Skip> {
    if let Some(refusal) = pause.refusal_at(now) {
        return Err(Skip::Refused(refusal));
    }
    let site = SiteUrl::parse(url).ok_or(Skip::NoMatch(TranslateError::Malformed))?;
    category_check(&site, policy).map_err(Skip::Refused)?;
    translate::resolve_site(&site)
        .map(|target| target.to_uri())
        .map_err(Skip::NoMatch)
}

pub fn attempt(
    url: &str,
    policy: &RedirectPolicy,
    pause: &PauseState,
    now: DateTime<Utc>,
) -> Decision {
    match check(url, policy, pause, now) {
        Ok(uri) => {
            tracing::debug!(url, %uri, "redirect");
            Decision::Redirect(uri)
        }
        Err(skip) => {
            tracing::trace!(url, reason = %skip, "no redirect");
            Decision::Skip(skip)
        }
    }
}

#[cfg(test)]
mod tests;
