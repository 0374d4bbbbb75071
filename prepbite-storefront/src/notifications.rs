use chrono::{DateTime, Duration, Utc};
use prepbite_core::NotificationSink;
use prepbite_store::app_config::NotificationConfig;
use serde::Serialize;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    Visible,
    /// Sliding out
    Leaving,
    Gone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub shown_at: DateTime<Utc>,
    pub leave_at: DateTime<Utc>,
    pub gone_at: DateTime<Utc>,
}

impl Toast {
    pub fn phase(&self, now: DateTime<Utc>) -> ToastPhase {
        if now < self.leave_at {
            ToastPhase::Visible
        } else if now < self.gone_at {
            ToastPhase::Leaving
        } else {
            ToastPhase::Gone
        }
    }
}

/// Pending toasts for the host to draw. Each dismisses itself on a fixed
/// schedule; nothing can cancel or extend it.
pub struct ToastQueue {
    timings: NotificationConfig,
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new(timings: NotificationConfig) -> Self {
        Self {
            timings,
            toasts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_at(&self, message: &str, now: DateTime<Utc>) -> Toast {
        let leave_at = now + Duration::milliseconds(self.timings.visible_ms as i64);
        let gone_at = leave_at + Duration::milliseconds(self.timings.transition_ms as i64);
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.to_string(),
            shown_at: now,
            leave_at,
            gone_at,
        };

        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast.clone());
        }
        toast
    }

    /// Toasts still on screen at `now`, dropping the ones that are gone.
    pub fn on_screen(&self, now: DateTime<Utc>) -> Vec<Toast> {
        match self.toasts.lock() {
            Ok(mut toasts) => {
                toasts.retain(|toast| toast.phase(now) != ToastPhase::Gone);
                toasts.clone()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.lock().ok()?.last().cloned()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, message: &str) {
        let toast = self.push_at(message, Utc::now());
        tracing::debug!("Toast {} shown: {}", toast.id, toast.message);
    }
}
