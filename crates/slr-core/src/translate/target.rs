use std::fmt;

use serde::Serialize;

/// Scheme token shared by every launch URI.
pub const LAUNCH_SCHEME: &str = "launch://";

/// Client page a web URL maps to. Identifiers are kept exactly as captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// Store page of an app.
    StoreApp(String),
    /// Store page of a package (sub) or bundle.
    StorePackage(String),
    StoreHome,
    /// Profile by vanity name or numeric id.
    Profile(String),
    /// Workshop / shared file.
    WorkshopItem(String),
    /// Community hub of an app.
    GameHub(String),
    Group(String),
    CommunityHome,
}

impl LaunchTarget {
    pub fn to_uri(&self) -> LaunchUri {
        let uri = match self {
            LaunchTarget::StoreApp(id) => format!("{LAUNCH_SCHEME}store/{id}"),
            LaunchTarget::StorePackage(id) => format!("{LAUNCH_SCHEME}open/StoreAppPage/{id}"),
            LaunchTarget::StoreHome => format!("{LAUNCH_SCHEME}store"),
            LaunchTarget::Profile(id) => format!("{LAUNCH_SCHEME}open/SteamIDPage/{id}"),
            LaunchTarget::WorkshopItem(id) => {
                format!("{LAUNCH_SCHEME}open/CommunityFilePage/{id}")
            }
            LaunchTarget::GameHub(id) => format!("{LAUNCH_SCHEME}open/GameHub/{id}"),
            LaunchTarget::Group(id) => format!("{LAUNCH_SCHEME}open/GroupSteamIDPage/{id}"),
            LaunchTarget::CommunityHome => format!("{LAUNCH_SCHEME}open/CommunityHome"),
        };
        LaunchUri(uri)
    }
}

/// An address in the launch scheme. Only produced by [`LaunchTarget::to_uri`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LaunchUri(String);

impl LaunchUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for LaunchUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaunchUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
