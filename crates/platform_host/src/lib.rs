//! Typed host-domain contracts and shared models used by the server-list core and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the settings-store
//! contract the favorites registry persists through and the notification-platform contract the
//! notification gateway drives, together with in-memory, unsupported, and recording adapters.
//! Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod notifications;
pub mod storage;

pub use host::{HostServices, HostStrategy};
pub use notifications::{
    NotificationAction, NotificationCapabilities, NotificationClickHandler, NotificationFuture,
    NotificationPermission, NotificationPlatform, NotificationRequest,
    RecordingNotificationPlatform, UnsupportedNotificationPlatform,
};
pub use storage::{get_json_or, set_json, try_get_json, MemorySettingsStore, SettingsStore};
