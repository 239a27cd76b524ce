// Notification sink - session side of the user-facing notification display
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// Display duration bucket; the rendering layer maps these to actual
/// durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTimeout {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub timeout: NotificationTimeout,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        timeout: NotificationTimeout,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            timeout,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}

/// Delivers notifications to the user. Display and queueing are the
/// embedding application's concern.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that logs through `tracing`, for headless embeddings and
/// tests that just want notifications visible in the log stream.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Warning | Severity::Danger => tracing::warn!("{}", notification),
            Severity::Info | Severity::Success => tracing::info!("{}", notification),
        }
    }
}
