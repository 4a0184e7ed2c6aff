//! Web URL → launch URI translation.
//!
//! [`translate`] is a pure function of its input: no settings, no clock, no
//! I/O. Anything it does not recognise (malformed input, unknown hosts, help
//! pages, unmatched paths) comes back as `None`, so the original page simply
//! loads in the browser. [`resolve`] exposes the same decision with the reason
//! a URL was left alone.

mod rules;
mod target;

pub use target::{LaunchTarget, LaunchUri, LAUNCH_SCHEME};

use crate::url_model::{SiteFamily, SiteUrl};

/// Why a URL has no launch URI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("not a well-formed absolute URL")]
    Malformed,
    #[error("host is not a store, community or help site")]
    UnknownHost,
    #[error("help pages stay in the browser")]
    HelpExcluded,
    #[error("workshop page without a file id")]
    MissingFileId,
    #[error("no launch rule for this {0} page")]
    Unrecognized(SiteFamily),
}

/// Resolves `url` to the page it should open in the client.
pub fn resolve(url: &str) -> Result<LaunchTarget, TranslateError> {
    let site = SiteUrl::parse(url).ok_or(TranslateError::Malformed)?;
    resolve_site(&site)
}

/// Same as [`resolve`] for an already parsed URL.
pub fn resolve_site(site: &SiteUrl) -> Result<LaunchTarget, TranslateError> {
    match site.family() {
        Some(SiteFamily::Store) => rules::store(site),
        Some(SiteFamily::Community) => rules::community(site),
        Some(SiteFamily::Help) => Err(TranslateError::HelpExcluded),
        None => Err(TranslateError::UnknownHost),
    }
}

/// Translates a web URL into its launch URI, or `None` when the page should
/// stay in the browser.
pub fn translate(url: &str) -> Option<LaunchUri> {
    match resolve(url) {
        Ok(target) => Some(target.to_uri()),
        Err(reason) => {
            tracing::trace!(url, %reason, "no launch uri");
            None
        }
    }
}
