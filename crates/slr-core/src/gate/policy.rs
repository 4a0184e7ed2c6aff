/// Per-category redirect toggles, read from a settings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPolicy {
    pub redirect_store: bool,
    pub redirect_community: bool,
    pub redirect_help: bool,
    /// Allows help "wizard" flows even when `redirect_help` is off.
    pub redirect_help_wizard: bool,
    /// Allows help ticket pages even when `redirect_help` is off.
    pub redirect_help_tickets: bool,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self {
            redirect_store: true,
            redirect_community: true,
            redirect_help: false,
            redirect_help_wizard: false,
            redirect_help_tickets: false,
        }
    }
}

impl RedirectPolicy {
    /// Decision for a help-site path. The wizard and ticket overrides win over
    /// a disabled general help toggle.
    pub fn allows_help_path(&self, path: &str) -> bool {
        let path = path.to_ascii_lowercase();
        if self.redirect_help_wizard && path.contains("/wizard/") {
            return true;
        }
        if self.redirect_help_tickets && path.contains("/ticket") {
            return true;
        }
        self.redirect_help
    }
}
