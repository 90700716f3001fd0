//! Notification payload models handed to a [`crate::NotificationPlatform`].

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Callback invoked with the action identifier (`""` for a plain click) when the user interacts
/// with a delivered notification.
pub type NotificationClickHandler = Rc<dyn Fn(&str)>;

/// One button shown on a delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Stable action identifier reported back on click.
    pub action: String,
    /// Button label.
    pub title: String,
}

impl NotificationAction {
    /// Creates an action from an identifier and a label.
    pub fn new(action: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            title: title.into(),
        }
    }
}

/// Fully-resolved notification payload.
///
/// Field names serialize in the shape the browser `showNotification` options object expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Notification heading.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Coalescing tag; notifications sharing a tag may replace each other.
    pub tag: String,
    /// Icon URL.
    pub icon: String,
    /// Vibration pattern in milliseconds.
    pub vibrate: Vec<u32>,
    /// Monochrome badge URL.
    pub badge: String,
    /// Buttons shown on the notification.
    pub actions: Vec<NotificationAction>,
}

impl NotificationRequest {
    /// Returns the action identifiers in display order.
    pub fn action_ids(&self) -> Vec<&str> {
        self.actions
            .iter()
            .map(|action| action.action.as_str())
            .collect()
    }
}
