//! Transient notifications shown as a toast.
//!
//! At most one notification is active. Showing a new one replaces the old
//! message and restarts the deadline; nothing is queued. The deadline lives in
//! state owned by the wallet, so dropping the wallet cancels it.

use std::time::{Duration, Instant};

use crate::state::config::DEFAULT_NOTIFICATION_TIMEOUT_MS;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// The currently visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

/// Single-slot notification channel with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Notifications {
    timeout: Duration,
    current: Option<Notification>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS))
    }
}

impl Notifications {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            current: None,
        }
    }

    /// Replaces any current message and restarts the timer from `now`.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            expires_at: now + self.timeout,
        });
    }

    /// Clears the message once its deadline has passed.
    ///
    /// # Returns
    ///
    /// `true` if a message was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notification) if now >= notification.expires_at => {
                tracing::debug!(message = %notification.message, "Notification expired");
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Removes the message immediately. Clearing an empty channel is a no-op.
    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
