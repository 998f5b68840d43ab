//! Toast notifications: severities, notification records and the center that
//! owns their lifecycle.

use std::fmt;
use std::time::{Duration, Instant};

pub mod center;

pub use center::NotificationCenter;

/// Default time a notification stays on screen
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Default number of notifications visible at once
pub const DEFAULT_CAPACITY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info, // Blue
    Success, // Green
    Warning, // Yellow
    Error,   // Red
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✗",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Identifier of a notification, unique for the lifetime of its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    /// `None` keeps the notification until dismissed explicitly
    pub dismiss_after: Option<Duration>,
}

impl Notification {
    /// Time left before auto-dismissal, `None` for sticky notifications
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let total = self.dismiss_after?;
        let elapsed = now.saturating_duration_since(self.created_at);
        Some(total.saturating_sub(elapsed))
    }

    pub fn is_sticky(&self) -> bool {
        self.dismiss_after.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_matches_lowercase_names() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        let t0 = Instant::now();
        let notification = Notification {
            id: NotificationId(1),
            message: "Saved".to_string(),
            severity: Severity::Success,
            created_at: t0,
            dismiss_after: Some(Duration::from_millis(5000)),
        };

        assert_eq!(
            notification.remaining(t0 + Duration::from_millis(1500)),
            Some(Duration::from_millis(3500))
        );
        assert_eq!(
            notification.remaining(t0 + Duration::from_secs(9)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn sticky_notification_has_no_remaining_time() {
        let notification = Notification {
            id: NotificationId(2),
            message: "Pinned".to_string(),
            severity: Severity::Info,
            created_at: Instant::now(),
            dismiss_after: None,
        };
        assert!(notification.is_sticky());
        assert_eq!(notification.remaining(Instant::now()), None);
    }
}
