//! Blocking-alert slot backing the picker's "Done with nothing selected"
//! warning.
//!
//! The form renders whatever is in the slot as a blocking alert, so there
//! is never more than one warning: raising a new one replaces the old, and
//! any successful navigation clears it. A TTL from
//! [`PickerConfig`](crate::config::PickerConfig) optionally expires a
//! warning the seller has walked away from.

use std::time::{Duration, Instant};

/// One warning at a time, with optional expiry.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    /// Warning text plus the instant it was raised
    current: Option<(String, Instant)>,
    /// Expiry horizon; `None` keeps a warning until the next action
    ttl: Option<Duration>,
}

impl StatusMessage {
    /// A slot whose warnings lapse after `ttl`, when one is given.
    #[must_use]
    pub const fn with_ttl(ttl: Option<Duration>) -> Self {
        Self { current: None, ttl }
    }

    /// Raise a warning, replacing whatever was showing.
    pub fn set(&mut self, text: impl Into<String>) {
        self.current = Some((text.into(), Instant::now()));
    }

    /// Drop the warning. Called on every navigation that succeeds.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The warning to render, dropping it first when its TTL has lapsed.
    pub fn message(&mut self) -> Option<&str> {
        let lapsed = match (&self.current, self.ttl) {
            (Some((_, raised)), Some(ttl)) => raised.elapsed() >= ttl,
            _ => false,
        };
        if lapsed {
            self.current = None;
        }
        self.current.as_ref().map(|(text, _)| text.as_str())
    }

    /// The warning without the expiry check, for render paths that take
    /// `&self`.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.current.as_ref().map(|(text, _)| text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_raise_replace_and_clear() {
        let mut status = StatusMessage::with_ttl(None);
        assert!(status.peek().is_none());

        status.set("Select a category before confirming");
        status.set("Categories are still loading");
        assert_eq!(status.peek(), Some("Categories are still loading"));

        status.clear();
        assert!(status.peek().is_none());
        assert!(status.message().is_none());
    }

    #[test]
    fn test_warning_lapses_after_ttl() {
        let mut status = StatusMessage::with_ttl(Some(Duration::from_millis(50)));

        status.set("Select a category before confirming");
        assert!(status.message().is_some());

        thread::sleep(Duration::from_millis(60));
        assert!(status.message().is_none());
        assert!(status.peek().is_none(), "a lapsed warning stays gone");
    }

    #[test]
    fn test_no_ttl_means_warning_sticks() {
        let mut status = StatusMessage::with_ttl(None);

        status.set("Select a category before confirming");
        thread::sleep(Duration::from_millis(10));
        assert!(status.message().is_some());
    }

    #[test]
    fn test_peek_shows_a_lapsed_warning_without_dropping_it() {
        let mut status = StatusMessage::with_ttl(Some(Duration::from_millis(1)));

        status.set("Select a category before confirming");
        thread::sleep(Duration::from_millis(5));

        // peek takes &self; only message() applies the expiry.
        assert!(status.peek().is_some());
        assert!(status.message().is_none());
    }

    #[test]
    fn test_raising_again_restarts_the_clock() {
        let mut status = StatusMessage::with_ttl(Some(Duration::from_millis(40)));

        status.set("Select a category before confirming");
        thread::sleep(Duration::from_millis(25));
        status.set("Select a category before confirming");
        thread::sleep(Duration::from_millis(25));

        // 50ms after the first raise, 25ms after the second: still showing.
        assert!(status.message().is_some());
    }
}
