//! Notification-domain contracts and lightweight adapters.

mod permission;
mod request;
mod service;

pub use permission::{NotificationCapabilities, NotificationPermission};
pub use request::{NotificationAction, NotificationClickHandler, NotificationRequest};
pub use service::{
    NotificationFuture, NotificationPlatform, RecordingNotificationPlatform,
    UnsupportedNotificationPlatform,
};
