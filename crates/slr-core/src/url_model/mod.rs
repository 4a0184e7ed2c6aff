//! URL modeling: site classification and identifier captures.
//!
//! A navigation URL is parsed once into a [`SiteUrl`], which exposes the
//! pieces the translator and the gate look at: the site family of the host,
//! the raw (still percent-encoded) path, and decoded query pairs.

mod path;

pub use path::{numeric_after, segment_after};

use std::fmt;

use url::Url;

/// Storefront host (commerce pages).
pub const STORE_HOST: &str = "store.steampowered.com";
/// Community host (profiles, groups, workshop).
pub const COMMUNITY_HOST: &str = "steamcommunity.com";
/// Help / support host.
pub const HELP_HOST: &str = "help.steampowered.com";

/// Which known site a hostname belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteFamily {
    Store,
    Community,
    Help,
}

impl SiteFamily {
    /// Classifies a hostname by case-insensitive containment, so `www.` or any
    /// other leading label still matches. Returns `None` for unknown hosts.
    pub fn from_host(host: &str) -> Option<Self> {
        let host = host.to_ascii_lowercase();
        if host.contains(STORE_HOST) {
            Some(SiteFamily::Store)
        } else if host.contains(COMMUNITY_HOST) {
            Some(SiteFamily::Community)
        } else if host.contains(HELP_HOST) {
            Some(SiteFamily::Help)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteFamily::Store => "store",
            SiteFamily::Community => "community",
            SiteFamily::Help => "help",
        }
    }
}

impl fmt::Display for SiteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed navigation URL together with its site family.
#[derive(Debug, Clone)]
pub struct SiteUrl {
    url: Url,
    family: Option<SiteFamily>,
}

impl SiteUrl {
    /// Parses an absolute URL. Returns `None` for anything the URL parser
    /// rejects (empty input, relative references, garbage).
    pub fn parse(input: &str) -> Option<Self> {
        let url = Url::parse(input).ok()?;
        let family = url.host_str().and_then(SiteFamily::from_host);
        Some(Self { url, family })
    }

    pub fn family(&self) -> Option<SiteFamily> {
        self.family
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Path as it appears in the URL (percent-encoding preserved).
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// True for the site root (`""` or `"/"`).
    pub fn is_root(&self) -> bool {
        matches!(self.url.path(), "" | "/")
    }

    /// First decoded value for `key` in the query string, if any.
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_hosts() {
        assert_eq!(
            SiteFamily::from_host("store.steampowered.com"),
            Some(SiteFamily::Store)
        );
        assert_eq!(
            SiteFamily::from_host("steamcommunity.com"),
            Some(SiteFamily::Community)
        );
        assert_eq!(
            SiteFamily::from_host("help.steampowered.com"),
            Some(SiteFamily::Help)
        );
    }

    #[test]
    fn classification_tolerates_prefix_and_case() {
        assert_eq!(
            SiteFamily::from_host("www.steamcommunity.com"),
            Some(SiteFamily::Community)
        );
        assert_eq!(
            SiteFamily::from_host("STORE.SteamPowered.com"),
            Some(SiteFamily::Store)
        );
    }

    #[test]
    fn unknown_hosts() {
        assert_eq!(SiteFamily::from_host("www.google.com"), None);
        assert_eq!(SiteFamily::from_host("steampowered.com"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(SiteUrl::parse("").is_none());
        assert!(SiteUrl::parse("not-a-url").is_none());
        assert!(SiteUrl::parse("/app/730").is_none());
    }

    #[test]
    fn parse_without_host_has_no_family() {
        let site = SiteUrl::parse("mailto:someone@steamcommunity.com").unwrap();
        assert_eq!(site.family(), None);
    }

    #[test]
    fn root_and_query() {
        let site = SiteUrl::parse("https://steamcommunity.com").unwrap();
        assert!(site.is_root());
        let site =
            SiteUrl::parse("https://steamcommunity.com/x?id=1&id=2&q=a%20b").unwrap();
        assert!(!site.is_root());
        assert_eq!(site.query_value("id").as_deref(), Some("1"));
        assert_eq!(site.query_value("q").as_deref(), Some("a b"));
        assert_eq!(site.query_value("missing"), None);
    }
}
