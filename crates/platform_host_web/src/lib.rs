//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the settings store
//! (`localStorage`) and the notification platform (Notification, Service Worker, and Push APIs).
//! On non-WASM targets the adapters compile to inert fallbacks so the core can be tested
//! natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod notifications;
pub mod storage;

pub use adapters::{
    build_host_services, host_strategy_name, notification_platform, selected_host_strategy,
    settings_store, NotificationPlatformAdapter, SettingsStoreAdapter,
};
pub use notifications::click_routing::{ClickRoutes, NotificationClickMessage};
pub use notifications::WebNotificationPlatform;
pub use storage::local_settings::WebSettingsStore;
