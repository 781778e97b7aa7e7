//! Notification sending through an injected sender.

use std::fmt::{Display, Formatter};

/// Delivery capability a notifier must provide.
pub trait NotificationSender {
    /// Attempts delivery and reports whether it succeeded.
    fn send(&self, message: &str) -> bool;
}

impl<T: NotificationSender + ?Sized> NotificationSender for &T {
    fn send(&self, message: &str) -> bool {
        (**self).send(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    Sent,
    Failed,
    InvalidMessage,
}

impl NotificationOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "Notification Sent",
            Self::Failed => "Failed to Send",
            Self::InvalidMessage => "Invalid message",
        }
    }
}

impl Display for NotificationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends `message` through `sender`.
///
/// Missing or blank messages are rejected before the sender is called.
pub fn send_notification<S: NotificationSender + ?Sized>(
    sender: &S,
    message: Option<&str>,
) -> NotificationOutcome {
    let Some(message) = message.filter(|message| !message.trim().is_empty()) else {
        return NotificationOutcome::InvalidMessage;
    };

    if sender.send(message) {
        NotificationOutcome::Sent
    } else {
        log::warn!("event=notification_send module=exercises status=error error_code=send_failed");
        NotificationOutcome::Failed
    }
}
