use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, MemorySettingsStore, NotificationCapabilities,
    NotificationClickHandler, NotificationFuture, NotificationPermission, NotificationPlatform,
    NotificationRequest, SettingsStore, UnsupportedNotificationPlatform,
};

use crate::{WebNotificationPlatform, WebSettingsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete settings backend behind [`SettingsStore`].
#[derive(Debug, Clone)]
pub enum SettingsStoreAdapter {
    /// Browser `localStorage` persistence.
    Browser(WebSettingsStore),
    /// Process-local fallback used when the host is intentionally stubbed.
    Stub(MemorySettingsStore),
}

impl SettingsStore for SettingsStoreAdapter {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser(store) => store.get(key),
            Self::Stub(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.set(key, raw),
            Self::Stub(store) => store.set(key, raw),
        }
    }
}

/// Adapter enum that erases the concrete notification backend behind
/// [`NotificationPlatform`].
#[derive(Debug, Clone)]
pub enum NotificationPlatformAdapter {
    /// Browser Notification/Service Worker/Push-backed delivery.
    Browser(WebNotificationPlatform),
    /// Fallback that reports every capability as missing.
    Stub(UnsupportedNotificationPlatform),
}

impl NotificationPlatform for NotificationPlatformAdapter {
    fn capabilities(&self) -> NotificationCapabilities {
        match self {
            Self::Browser(platform) => platform.capabilities(),
            Self::Stub(platform) => platform.capabilities(),
        }
    }

    fn permission(&self) -> NotificationPermission {
        match self {
            Self::Browser(platform) => platform.permission(),
            Self::Stub(platform) => platform.permission(),
        }
    }

    fn request_permission<'a>(&'a self) -> NotificationFuture<'a, NotificationPermission> {
        match self {
            Self::Browser(platform) => platform.request_permission(),
            Self::Stub(platform) => platform.request_permission(),
        }
    }

    fn show_notification(
        &self,
        request: &NotificationRequest,
        on_click: Option<NotificationClickHandler>,
    ) -> Result<(), String> {
        match self {
            Self::Browser(platform) => platform.show_notification(request, on_click),
            Self::Stub(platform) => platform.show_notification(request, on_click),
        }
    }
}

/// Builds the settings adapter for the compile-time selected host strategy.
pub fn settings_store() -> SettingsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => SettingsStoreAdapter::Browser(WebSettingsStore),
        HostStrategy::Stub => SettingsStoreAdapter::Stub(MemorySettingsStore::default()),
    }
}

/// Builds the notification adapter for the compile-time selected host strategy.
pub fn notification_platform() -> NotificationPlatformAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            NotificationPlatformAdapter::Browser(WebNotificationPlatform::default())
        }
        HostStrategy::Stub => NotificationPlatformAdapter::Stub(UnsupportedNotificationPlatform),
    }
}

/// Builds the full host service bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        settings: Rc::new(settings_store()),
        notifications: Rc::new(notification_platform()),
        host_strategy: selected_host_strategy(),
    }
}
