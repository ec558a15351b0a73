//! Toast notifications
//!
//! Views report outcomes through a cloneable `Notifier` that never blocks
//! and never fails. The `NotificationCenter` drains the channel once per
//! frame and keeps each toast visible for a fixed lifetime.

use crate::error::SignSpeakError;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const CHANNEL_CAPACITY: usize = 64;
const RECENT_CAPACITY: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Fire-and-forget handle for raising notifications
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: Sender<Notification>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.send(Notification {
            message: message.into(),
            severity: Severity::Success,
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(Notification {
            message: message.into(),
            severity: Severity::Error,
        });
    }

    /// Report an error using its user-facing message
    pub fn report(&self, err: &SignSpeakError) {
        warn!("{}", err);
        self.error(err.user_message());
    }

    fn send(&self, notification: Notification) {
        match self.tx.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(n)) => warn!("Notification dropped, queue full: {}", n.message),
            Err(TrySendError::Disconnected(n)) => {
                debug!("Notification dropped, center gone: {}", n.message)
            }
        }
    }
}

/// A notification currently on screen
#[derive(Clone, Debug)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Owner of the notification channel and the visible toasts
#[derive(Debug)]
pub struct NotificationCenter {
    tx: Sender<Notification>,
    rx: Receiver<Notification>,
    active: VecDeque<Toast>,
    recent: VecDeque<Notification>,
    lifetime: Duration,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        let (tx, rx) = bounded(CHANNEL_CAPACITY);
        Self {
            tx,
            rx,
            active: VecDeque::new(),
            recent: VecDeque::with_capacity(RECENT_CAPACITY),
            lifetime,
        }
    }

    pub fn notifier(&self) -> Notifier {
        Notifier {
            tx: self.tx.clone(),
        }
    }

    /// Move queued notifications on screen and drop expired toasts
    pub fn drain(&mut self, now: Instant) {
        while let Ok(notification) = self.rx.try_recv() {
            debug!("[TOAST] {:?}: {}", notification.severity, notification.message);
            if self.recent.len() >= RECENT_CAPACITY {
                self.recent.pop_front();
            }
            self.recent.push_back(notification.clone());
            self.active.push_back(Toast {
                notification,
                expires_at: now + self.lifetime,
            });
        }
        self.active.retain(|toast| toast.expires_at > now);
    }

    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.recent.back()
    }

    /// Earliest expiry among visible toasts
    pub fn next_expiry(&self) -> Option<Instant> {
        self.active.iter().map(|toast| toast.expires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_become_toasts_on_drain() {
        let t0 = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_millis(3000));
        let notifier = center.notifier();

        notifier.success("Text copied to clipboard!");
        assert_eq!(center.active().count(), 0);

        center.drain(t0);
        let toast = center.active().next().unwrap();
        assert_eq!(toast.notification.severity, Severity::Success);
        assert_eq!(toast.notification.message, "Text copied to clipboard!");
    }

    #[test]
    fn test_toasts_expire() {
        let t0 = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_millis(3000));
        center.notifier().error("Please enter some text first");
        center.drain(t0);

        center.drain(t0 + Duration::from_millis(2999));
        assert_eq!(center.active().count(), 1);
        center.drain(t0 + Duration::from_millis(3000));
        assert_eq!(center.active().count(), 0);
        assert_eq!(center.last().unwrap().message, "Please enter some text first");
    }

    #[test]
    fn test_report_uses_user_message() {
        let mut center = NotificationCenter::new(Duration::from_secs(1));
        center
            .notifier()
            .report(&SignSpeakError::Clipboard("permission denied".into()));
        center.drain(Instant::now());

        let last = center.last().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.message, "Unable to copy text");
    }

    #[test]
    fn test_full_queue_drops_without_panicking() {
        let mut center = NotificationCenter::new(Duration::from_secs(1));
        let notifier = center.notifier();
        for i in 0..(CHANNEL_CAPACITY + 10) {
            notifier.success(format!("toast {}", i));
        }
        center.drain(Instant::now());
        assert_eq!(center.active().count(), CHANNEL_CAPACITY);
    }
}
