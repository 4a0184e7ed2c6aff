//! Navigation events and explicit handler registration.
//!
//! Hosts deliver page loads as [`NavigationEvent`]s to handlers registered on
//! a [`NavigationHub`]. [`LineSource`] is a text host: it reads one event per
//! line (`<tab-id> <url> [top|sub]`) from any `BufRead`.

use std::io::BufRead;

use anyhow::{Context, Result};

/// Browser tab identifier.
pub type TabId = i64;

/// A page load that is about to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub tab_id: TabId,
    pub url: String,
    /// Only top-level frames are eligible for redirects.
    pub top_level: bool,
}

impl NavigationEvent {
    pub fn top_level(tab_id: TabId, url: impl Into<String>) -> Self {
        Self {
            tab_id,
            url: url.into(),
            top_level: true,
        }
    }

    pub fn subframe(tab_id: TabId, url: impl Into<String>) -> Self {
        Self {
            tab_id,
            url: url.into(),
            top_level: false,
        }
    }
}

pub type NavigationListener<'a> = Box<dyn FnMut(&NavigationEvent) + 'a>;

/// Fans each event out to the registered listeners, in registration order.
#[derive(Default)]
pub struct NavigationHub<'a> {
    listeners: Vec<NavigationListener<'a>>,
}

impl<'a> NavigationHub<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_before_navigate(&mut self, listener: impl FnMut(&NavigationEvent) + 'a) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: &NavigationEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventLineError {
    #[error("missing url after tab id")]
    MissingUrl,
    #[error("invalid tab id {0:?}")]
    InvalidTabId(String),
    #[error("unknown frame kind {0:?} (expected top or sub)")]
    UnknownFrame(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// Parses `<tab-id> <url> [top|sub]`. Blank lines and `#` comments yield
/// `Ok(None)`. The url is passed through untouched; validating it is the
/// translator's job.
pub fn parse_event_line(line: &str) -> Result<Option<NavigationEvent>, EventLineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let tab = fields.next().unwrap_or_default();
    let tab_id: TabId = tab
        .parse()
        .map_err(|_| EventLineError::InvalidTabId(tab.to_string()))?;
    let url = fields.next().ok_or(EventLineError::MissingUrl)?;
    let top_level = match fields.next() {
        None | Some("top") => true,
        Some("sub") => false,
        Some(other) => return Err(EventLineError::UnknownFrame(other.to_string())),
    };
    if let Some(extra) = fields.next() {
        return Err(EventLineError::TrailingInput(extra.to_string()));
    }

    Ok(Some(NavigationEvent {
        tab_id,
        url: url.to_string(),
        top_level,
    }))
}

/// Line-oriented event source.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads to EOF, emitting every well-formed line into `hub`. Bad lines are
    /// logged and skipped. Returns the number of events emitted.
    pub fn pump(self, hub: &mut NavigationHub<'_>) -> Result<usize> {
        let mut emitted = 0;
        for (idx, line) in self.reader.lines().enumerate() {
            let line = line.context("read navigation event")?;
            match parse_event_line(&line) {
                Ok(Some(event)) => {
                    hub.emit(&event);
                    emitted += 1;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(line = idx + 1, "skipping navigation event: {}", e),
            }
        }
        Ok(emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_top_level_by_default() {
        let event = parse_event_line("7 https://steamcommunity.com/")
            .unwrap()
            .unwrap();
        assert_eq!(event, NavigationEvent::top_level(7, "https://steamcommunity.com/"));
    }

    #[test]
    fn parse_frame_kinds() {
        let sub = parse_event_line("3\thttps://a.example/ sub").unwrap().unwrap();
        assert!(!sub.top_level);
        let top = parse_event_line("3 https://a.example/ top").unwrap().unwrap();
        assert!(top.top_level);
    }

    #[test]
    fn parse_skips_blank_and_comments() {
        assert_eq!(parse_event_line(""), Ok(None));
        assert_eq!(parse_event_line("   "), Ok(None));
        assert_eq!(parse_event_line("# tab url"), Ok(None));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_event_line("abc https://x/"),
            Err(EventLineError::InvalidTabId("abc".into()))
        );
        assert_eq!(parse_event_line("1"), Err(EventLineError::MissingUrl));
        assert_eq!(
            parse_event_line("1 https://x/ iframe"),
            Err(EventLineError::UnknownFrame("iframe".into()))
        );
        assert_eq!(
            parse_event_line("1 https://x/ top extra"),
            Err(EventLineError::TrailingInput("extra".into()))
        );
    }

    #[test]
    fn hub_fans_out_in_order() {
        let mut log = Vec::new();
        {
            let log_ref = std::cell::RefCell::new(&mut log);
            let mut hub = NavigationHub::new();
            hub.on_before_navigate(|e| log_ref.borrow_mut().push(format!("a{}", e.tab_id)));
            hub.on_before_navigate(|e| log_ref.borrow_mut().push(format!("b{}", e.tab_id)));
            assert_eq!(hub.listener_count(), 2);
            hub.emit(&NavigationEvent::top_level(1, "x"));
            hub.emit(&NavigationEvent::subframe(2, "y"));
        }
        assert_eq!(log, vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn line_source_skips_bad_lines() {
        let input = "# header\n1 https://store.steampowered.com/\nbogus\n\n2 https://x/ sub\n";
        let mut tabs = Vec::new();
        let emitted = {
            let mut hub = NavigationHub::new();
            hub.on_before_navigate(|e| tabs.push(e.tab_id));
            LineSource::new(input.as_bytes()).pump(&mut hub).unwrap()
        };
        assert_eq!(emitted, 2);
        assert_eq!(tabs, vec![1, 2]);
    }
}
