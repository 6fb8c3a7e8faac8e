//! Fire-and-forget notification seam.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

/// Presents a titled message somewhere the operator can see it. No return
/// value and no effect on control flow.
pub trait NotificationSink {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Sink that forwards notifications to the tracing subscriber. Shells that
/// render toasts supply their own sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Success => tracing::info!(title, message, "notification"),
            Severity::Danger => tracing::warn!(title, message, "notification"),
        }
    }
}
