//! Shared host-bundle models for browser and stub composition.

use std::rc::Rc;

use crate::{NotificationPlatform, SettingsStore};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition with placeholder/no-op adapters (native test harnesses, headless builds).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the server-list core.
///
/// All environment-specific service selection happens before this bundle is built, which keeps
/// the core decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Persisted settings store (favorites live here).
    pub settings: Rc<dyn SettingsStore>,
    /// Notification permission and delivery platform.
    pub notifications: Rc<dyn NotificationPlatform>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::Browser.as_str(), "browser");
        assert_eq!(HostStrategy::Stub.as_str(), "stub");
    }
}
