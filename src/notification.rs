//! Transient notifications
//!
//! One-line messages ("Suggestion copied to clipboard!") that expire on
//! their own. Any component can show one; the event loop ticks the state so
//! stale messages disappear.

use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<(String, Instant)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any current one
    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), Instant::now()));
    }

    /// Expire the message once its TTL has passed; called from the event loop
    pub fn tick(&mut self) {
        if let Some((_, shown_at)) = &self.current
            && shown_at.elapsed() >= NOTIFICATION_TTL
        {
            self.current = None;
        }
    }

    /// The active message, if any
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    #[cfg(test)]
    fn show_at(&mut self, message: impl Into<String>, shown_at: Instant) {
        self.current = Some((message.into(), shown_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let state = NotificationState::new();
        assert!(state.message().is_none());
    }

    #[test]
    fn test_show_sets_message() {
        let mut state = NotificationState::new();
        state.show("copied!");
        assert_eq!(state.message(), Some("copied!"));
    }

    #[test]
    fn test_show_replaces_message() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show("second");
        assert_eq!(state.message(), Some("second"));
    }

    #[test]
    fn test_fresh_message_survives_tick() {
        let mut state = NotificationState::new();
        state.show("fresh");
        state.tick();
        assert_eq!(state.message(), Some("fresh"));
    }

    #[test]
    fn test_old_message_expires_on_tick() {
        let mut state = NotificationState::new();
        state.show_at("stale", Instant::now() - NOTIFICATION_TTL * 2);
        state.tick();
        assert!(state.message().is_none());
    }
}
