//! Outbound signals from the interaction controller.
//!
//! The controller never calls back into the host. Each command appends
//! `Notification` items synchronously while it runs; the host drains them
//! with [`InteractionController::take_notifications`] after the command
//! returns and reacts (redraw, show a message).
//!
//! [`InteractionController::take_notifications`]: crate::interaction::InteractionController::take_notifications

use std::fmt;

/// Kind of signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// The model changed; the scene must be rebuilt.
    StateChanged,
    /// A vector was grabbed.
    DragStarted,
    /// The grabbed vector was released. The model is unchanged.
    DragEnded,
    /// Host input was rejected; the message is meant for the user.
    ValidationFailed,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateChanged => write!(f, "StateChanged"),
            Self::DragStarted => write!(f, "DragStarted"),
            Self::DragEnded => write!(f, "DragEnded"),
            Self::ValidationFailed => write!(f, "ValidationFailed"),
        }
    }
}

/// A single signal produced by a controller command.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// Human-readable detail.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Pending notifications, in emission order.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Remove and return everything collected so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }
}
