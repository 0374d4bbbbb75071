/// Fire-and-forget display of a short message to the shopper.
///
/// Callers never wait for the message to be shown or dismissed, so
/// implementations must not fail.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Sink for hosts without a toast surface: the message only reaches the log.
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("Notification: {}", message);
    }
}
