//! Path rules per site. Within a site the first matching rule wins.

use super::{LaunchTarget, TranslateError};
use crate::url_model::{numeric_after, segment_after, SiteFamily, SiteUrl};

const WORKSHOP_PATH: &str = "/sharedfiles/filedetails";

pub(super) fn store(site: &SiteUrl) -> Result<LaunchTarget, TranslateError> {
    let path = site.path();

    if let Some(id) = numeric_after(path, "/app/") {
        return Ok(LaunchTarget::StoreApp(id.to_string()));
    }
    if let Some(id) = numeric_after(path, "/sub/").or_else(|| numeric_after(path, "/bundle/")) {
        return Ok(LaunchTarget::StorePackage(id.to_string()));
    }
    if site.is_root() {
        return Ok(LaunchTarget::StoreHome);
    }

    // Genre, search and tag listings have no client counterpart.
    Err(TranslateError::Unrecognized(SiteFamily::Store))
}

pub(super) fn community(site: &SiteUrl) -> Result<LaunchTarget, TranslateError> {
    let path = site.path();

    if let Some(name) = segment_after(path, "/id/") {
        return Ok(LaunchTarget::Profile(name.to_string()));
    }
    if let Some(id) = numeric_after(path, "/profiles/") {
        return Ok(LaunchTarget::Profile(id.to_string()));
    }
    if path.contains(WORKSHOP_PATH) {
        return site
            .query_value("id")
            .filter(|id| !id.is_empty())
            .map(LaunchTarget::WorkshopItem)
            .ok_or(TranslateError::MissingFileId);
    }
    if let Some(id) = numeric_after(path, "/app/") {
        return Ok(LaunchTarget::GameHub(id.to_string()));
    }
    if let Some(name) = segment_after(path, "/groups/") {
        return Ok(LaunchTarget::Group(name.to_string()));
    }
    if site.is_root() {
        return Ok(LaunchTarget::CommunityHome);
    }

    Err(TranslateError::Unrecognized(SiteFamily::Community))
}
